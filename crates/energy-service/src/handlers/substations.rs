//! Substation listing handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use energy_core::Substation;

use super::ListParams;
use crate::error::ApiError;
use crate::state::AppState;

/// One entry of the substation listing.
#[derive(Debug, Serialize)]
pub struct SubstationEntry {
    /// Substation/transformer pair.
    pub substation_details: Substation,
}

/// Substation listing response.
#[derive(Debug, Serialize)]
pub struct SubstationsResponse {
    /// One page of substations.
    pub substations: Vec<SubstationEntry>,
}

/// List distinct substation/transformer pairs. `role` is accepted but unused.
pub async fn list_substations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<SubstationsResponse>, ApiError> {
    let page = state.pagination(params.page.as_deref(), params.limit.as_deref());

    let substations = state
        .store
        .list_substations(page)
        .await
        .map_err(|e| ApiError::storage(&e, state.config.expose_storage_errors))?;

    Ok(Json(SubstationsResponse {
        substations: substations
            .into_iter()
            .map(|substation_details| SubstationEntry { substation_details })
            .collect(),
    }))
}
