//! Conversion facade tying the pipeline stages together
//!
//! One converter instance is shared across requests; it holds no mutable
//! state, so each conversion is a pure function of the uploaded bytes.

use crate::assemble::assemble;
use crate::engine::{HtmlEngine, PdfEngine};
use crate::error::Result;
use crate::reader::read_notebook;
use std::sync::Arc;

/// Target format of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Browsable HTML document
    Html,
    /// Printable PDF document
    Pdf,
}

impl OutputFormat {
    /// File extension of the converted document
    #[inline]
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type of the converted document
    #[inline]
    #[must_use]
    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Pdf => "application/pdf",
        }
    }
}

/// Notebook converter holding the two format engines
///
/// # Examples
///
/// ```no_run
/// use nbpress_core::{HtmlEngine, Notebook, NotebookConverter, PdfEngine, Result};
/// use std::sync::Arc;
///
/// # struct Html;
/// # impl HtmlEngine for Html {
/// #     fn render(&self, _: &Notebook) -> Result<Vec<u8>> { Ok(Vec::new()) }
/// # }
/// # struct Pdf;
/// # impl PdfEngine for Pdf {
/// #     fn render(&self, _: &str) -> Result<Vec<u8>> { Ok(Vec::new()) }
/// # }
/// let converter = NotebookConverter::new(Arc::new(Html), Arc::new(Pdf));
/// let bytes = std::fs::read("analysis.ipynb")?;
/// let html = converter.convert_to_html(&bytes)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct NotebookConverter {
    html_engine: Arc<dyn HtmlEngine>,
    pdf_engine: Arc<dyn PdfEngine>,
}

impl NotebookConverter {
    /// Create a converter from the two format engines
    #[must_use]
    pub fn new(html_engine: Arc<dyn HtmlEngine>, pdf_engine: Arc<dyn PdfEngine>) -> Self {
        Self {
            html_engine,
            pdf_engine,
        }
    }

    /// Convert notebook bytes to a complete HTML document
    ///
    /// The parsed notebook model is handed to the HTML engine unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid notebook or the
    /// engine fails.
    pub fn convert_to_html(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!("converting notebook ({} bytes) to html", data.len());
        let notebook = read_notebook(data)?;
        self.html_engine.render(&notebook)
    }

    /// Convert notebook bytes to a complete PDF document
    ///
    /// The cell sequence is assembled into simplified markup first; the
    /// PDF engine consumes the serialized markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid notebook or the
    /// engine fails.
    pub fn convert_to_pdf(&self, data: &[u8]) -> Result<Vec<u8>> {
        log::debug!("converting notebook ({} bytes) to pdf", data.len());
        let notebook = read_notebook(data)?;
        let document = assemble(&notebook);
        self.pdf_engine.render(&document.to_markup())
    }
}

/// Derive the download filename by replacing the `.ipynb` extension
///
/// Only a trailing `.ipynb` is replaced; any other name gets the new
/// extension appended.
#[must_use]
pub fn output_filename(input: &str, format: OutputFormat) -> String {
    match input.strip_suffix(".ipynb") {
        Some(stem) => format!("{stem}.{}", format.extension()),
        None => format!("{input}.{}", format.extension()),
    }
}
