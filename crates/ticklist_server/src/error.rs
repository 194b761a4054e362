//! Error types for the server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use ticklist_store::StoreError;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while serving requests.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The store failed during a request.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The item snapshot could not be serialized into the page.
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The listener could not be bound or served.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // A failed operation fails the whole request: no retry, no
        // fallback render.
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
