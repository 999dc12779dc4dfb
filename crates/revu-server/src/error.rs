//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use revu_backend::BackendError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No route matched the requested path.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Backend content API request failed.
    #[error("Backend request failed: {0}")]
    Backend(#[from] BackendError),

    /// Internal error (task join failure and the like).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "path": path}),
            ),
            // The backend's own 404 means the document identifier is unknown
            Self::Backend(BackendError::HttpResponse { status: 404, .. }) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Review not found"}),
            ),
            Self::Backend(e) => (
                StatusCode::BAD_GATEWAY,
                json!({"error": e.to_string()}),
            ),
            Self::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
