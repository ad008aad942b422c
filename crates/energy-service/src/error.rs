//! API error types and responses.
//!
//! Two envelopes are used: validation failures return `{"errors": [...]}`
//! with 400, everything else returns `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use energy_store::StoreError;

/// Message returned for storage failures when detail is redacted.
pub const REDACTED_STORAGE_ERROR: &str = "internal storage error";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// One or more request parameters failed validation.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Storage failure; the message is already safe to show the caller.
    #[error("storage error: {0}")]
    Storage(String),

    /// Storage backend is not reachable.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Build a storage error, redacting the detail unless `expose` is set.
    ///
    /// The full detail is always logged.
    #[must_use]
    pub fn storage(err: &StoreError, expose: bool) -> Self {
        tracing::error!(error = %err, "Storage query failed");
        if expose {
            Self::Storage(err.to_string())
        } else {
            Self::Storage(REDACTED_STORAGE_ERROR.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Self::Storage(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            Self::Unavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<energy_core::CoreError> for ApiError {
    fn from(err: energy_core::CoreError) -> Self {
        match err {
            energy_core::CoreError::InvalidQuery(errors) => Self::Validation(errors),
            other => Self::Validation(vec![other.to_string()]),
        }
    }
}
