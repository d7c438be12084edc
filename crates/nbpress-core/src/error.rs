//! Error types for notebook conversion operations

use thiserror::Error;

/// Error type for conversion operations
///
/// A conversion either fully succeeds or fully fails: there is no partial
/// output mode, and no error is retried or recovered from. Messages are
/// preserved whole so the caller can surface them to the client.
#[derive(Error, Debug)]
pub enum NbpressError {
    /// The uploaded bytes are not a valid notebook (encoding or schema)
    #[error("Invalid notebook input: {0}")]
    InvalidInput(String),

    /// A format engine reported an internal failure
    #[error("Renderer failed: {0}")]
    RendererError(String),

    /// Any other unanticipated fault during translation or assembly
    #[error("Conversion failed: {0}")]
    ConversionError(String),

    /// I/O error when reading a notebook file
    #[error("Failed to read notebook file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, NbpressError>;
