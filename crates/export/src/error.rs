//! Export error types

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while encoding a document
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writer failure, including a row that does not match the header width
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying sink could not be written or flushed
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
}
