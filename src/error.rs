//! Error types shared across layers.
//!
//! [`AppError`] is the HTTP-facing error rendered as a JSON envelope;
//! [`StoreError`] covers failures of the visit file backend.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors returned by HTTP handlers and middleware.
///
/// Every variant renders as:
///
/// ```json
/// { "error": { "code": "unauthorized", "message": "...", "details": {} } }
/// ```
#[derive(Debug)]
pub enum AppError {
    Unauthorized { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { message, .. } | Self::Internal { message, .. } => {
                f.write_str(message)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Failures reading or writing the persisted visit record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("visit store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("visit store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Visit store failure");
        AppError::internal("Visit store failure", serde_json::json!({}))
    }
}
