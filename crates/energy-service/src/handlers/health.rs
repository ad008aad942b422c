//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "energy-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness endpoint: healthy only while the store answers.
pub async fn ready(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        ApiError::Unavailable("store unavailable".into())
    })?;

    Ok(Json(HealthResponse::ok()))
}
