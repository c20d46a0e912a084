//! Catalog error types

use std::io;

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Catalog document is not valid JSON or has the wrong shape
    #[error("failed to parse catalog '{path}': {source}")]
    Parse {
        /// Path to the file
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Price string is not a decimal number
    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    /// Backing store is unreachable
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Create an Io error
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a Parse error
    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
