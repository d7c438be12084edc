//! In-memory cell model shared by both conversion paths
//!
//! The model is deliberately flat: a notebook is an ordered cell sequence,
//! a cell has no identity beyond its position, and a code cell owns its
//! outputs in execution order. Order is preserved through every stage.

use jupyter_protocol::media::Media;

/// A parsed notebook: the full input document
#[derive(Debug, Clone, Default)]
pub struct Notebook {
    /// Cells in document order
    pub cells: Vec<Cell>,
    /// Notebook title from metadata, if specified
    pub title: Option<String>,
    /// Programming language name (e.g. "python"), if specified
    pub language: Option<String>,
}

/// One narrative or executable unit of a notebook
#[derive(Debug, Clone)]
pub enum Cell {
    /// Narrative cell carrying light markdown
    Markdown {
        /// Raw cell text, possibly multi-line
        source: String,
    },
    /// Executable cell with captured outputs
    Code {
        /// Raw source code, never markup-translated
        source: String,
        /// Execution count, if the cell has been run
        execution_count: Option<i32>,
        /// Captured outputs in execution order
        outputs: Vec<Output>,
    },
}

/// Captured result of executing a code cell
#[derive(Debug, Clone)]
pub enum Output {
    /// stdout/stderr text
    Stream {
        /// The captured text blob
        text: String,
    },
    /// Rich display result (covers the schema's `execute_result` and
    /// `display_data`); carries the parser's MIME bundle, of which only
    /// `text/plain` is consumed by the simplified path
    Rich {
        /// MIME type to representation mapping
        data: Media,
    },
    /// Any other output kind, acknowledged as present but never rendered
    Unsupported {
        /// The schema discriminator that was not recognized
        kind: String,
    },
}
