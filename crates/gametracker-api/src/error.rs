//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use gametracker_core::error::{AppError, ErrorKind};

/// Message sent to clients in place of server-side fault details.
const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Handler-facing error: every `AppError` converts into one via `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status and error code for the wrapped error.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self.0.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            // A wrong owner is reported exactly like a failed authentication.
            ErrorKind::Authentication | ErrorKind::Authorization => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        let message = if self.0.kind.is_server_fault() {
            tracing::error!(
                kind = %self.0.kind,
                error = %self.0.message,
                source = ?self.0.source,
                "Request failed with server error"
            );
            INTERNAL_MESSAGE.to_string()
        } else {
            self.0.message
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
