//! Format engine contracts
//!
//! Both terminal renderers are opaque, replaceable collaborators behind a
//! narrow markup-in/bytes-out contract. The pipeline never inspects or
//! alters their output, and any reported failure aborts the whole
//! conversion. Tests inject stubs.

use crate::error::Result;
use crate::notebook::Notebook;

/// Full-fidelity HTML renderer
///
/// Receives the parsed notebook model unmodified and produces a complete
/// HTML document.
pub trait HtmlEngine: Send + Sync {
    /// Render the notebook model into a complete HTML document
    ///
    /// # Errors
    ///
    /// Returns an error if the engine cannot produce a document; the
    /// conversion is aborted with no partial output.
    fn render(&self, notebook: &Notebook) -> Result<Vec<u8>>;
}

/// Markup-to-PDF rasterizer
///
/// Receives the assembled document's serialized markup and produces a
/// complete paginated PDF document.
pub trait PdfEngine: Send + Sync {
    /// Rasterize serialized markup into a complete PDF document
    ///
    /// # Errors
    ///
    /// Returns an error if rasterization fails; the conversion is aborted
    /// with no partial output.
    fn render(&self, markup: &str) -> Result<Vec<u8>>;
}
