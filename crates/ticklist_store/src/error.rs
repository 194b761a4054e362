//! Error types for store operations.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the store document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store document exists but cannot be parsed.
    #[error("malformed store document: {message}")]
    MalformedDocument {
        /// Description of what failed to parse.
        message: String,
    },

    /// The configured store location cannot be used.
    #[error("invalid store location: {message}")]
    InvalidLocation {
        /// Description of the problem.
        message: String,
    },
}

impl StoreError {
    /// Creates a malformed document error.
    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    /// Creates an invalid location error.
    pub fn invalid_location(message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_message() {
        let err = StoreError::malformed_document("expected array");
        assert!(err.to_string().contains("expected array"));

        let err = StoreError::invalid_location("path is a directory");
        assert!(err.to_string().contains("path is a directory"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
