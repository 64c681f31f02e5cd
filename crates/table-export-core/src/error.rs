//! Error types for table-export-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while exporting a table
#[derive(Debug, Error)]
pub enum Error {
    /// The table reference does not resolve to any element
    #[error("Table not found: {0}")]
    NotFound(String),

    /// Text or payload the encoding step cannot represent
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error while writing to a caller-supplied writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new "not found" error for an element identifier
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound(id.into())
    }

    /// Create a new encoding error with a message
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Error::Encoding(msg.into())
    }

    /// Whether this error means the table reference did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
