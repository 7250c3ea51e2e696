//! Maps domain `AppError` to HTTP responses.
//!
//! Error bodies are plain text. Server-side failures are logged here and
//! reach the client only as a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use filetree_core::error::{AppError, ErrorKind};

/// Body sent for every 404.
pub const NOT_FOUND_BODY: &str = "Not found";

/// Body sent for every 500.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Local wrapper so `AppError` can be returned from handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        match err.kind {
            ErrorKind::NotFound => {
                tracing::debug!(error = %err.message, "Not found");
                (status, NOT_FOUND_BODY).into_response()
            }
            ErrorKind::Validation | ErrorKind::Conflict => {
                tracing::debug!(kind = %err.kind, error = %err.message, "Request rejected");
                (status, err.message).into_response()
            }
            _ => {
                tracing::error!(
                    kind = %err.kind,
                    error = %err.message,
                    source = ?err.source,
                    "Internal server error"
                );
                (status, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;
