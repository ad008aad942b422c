//! Account usage handler.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, RawQuery, State};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use energy_core::{CoreError, Role, UsageQuery, UsageRecord};

use crate::error::ApiError;
use crate::state::AppState;

/// Message reported when the query string itself cannot be decoded.
pub const MALFORMED_QUERY: &str = "Malformed query string";

/// Raw query parameters. A repeated key keeps its last value.
type Params = BTreeMap<String, String>;

/// Date range echoed back exactly as requested.
#[derive(Debug, Serialize)]
pub struct DateRangeEcho {
    /// Requested start date.
    pub start_date: String,
    /// Requested end date.
    pub end_date: String,
}

/// Usage details block.
#[derive(Debug, Serialize)]
pub struct UsageDetails {
    /// Requested range.
    pub date_range: DateRangeEcho,
    /// One row per account-day, with masked account numbers.
    pub accounts: Vec<UsageRecord>,
}

/// Usage response.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    /// Usage details.
    pub usage_details: UsageDetails,
}

/// Half-hourly usage for one account within a date range.
///
/// Invalid requests are written to the audit log before the 400 is returned;
/// the store is not queried for them.
pub async fn account_usage(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
    params: Result<Query<Params>, QueryRejection>,
) -> Result<Json<UsageResponse>, ApiError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            let errors = vec![MALFORMED_QUERY.to_string()];
            tracing::info!(reason = %rejection.body_text(), "Rejected usage request");
            state.audit.record(&json!({ "query": raw }), &errors).await;
            return Err(ApiError::Validation(errors));
        }
    };
    let param = |key: &str| params.get(key).map(String::as_str);

    let query = UsageQuery {
        account_no: param("account_no").map(str::to_owned),
        start_date: param("start_date").map(str::to_owned),
        end_date: param("end_date").map(str::to_owned),
    };

    let valid = match query.validate() {
        Ok(valid) => valid,
        Err(CoreError::InvalidQuery(errors)) => {
            tracing::info!(?errors, "Rejected usage request");
            state.audit.record(&params, &errors).await;
            return Err(ApiError::Validation(errors));
        }
        Err(other) => return Err(other.into()),
    };

    let page = state.pagination(param("page"), param("limit"));
    let role = Role::from_param(param("role"));

    let records = state
        .store
        .account_usage(&valid.account_no, valid.range, page)
        .await
        .map_err(|e| ApiError::storage(&e, state.config.expose_storage_errors))?;

    tracing::debug!(
        start = %valid.range.start,
        end = %valid.range.end,
        %role,
        returned = records.len(),
        "Served account usage"
    );

    Ok(Json(UsageResponse {
        usage_details: UsageDetails {
            date_range: DateRangeEcho {
                start_date: valid.start_date,
                end_date: valid.end_date,
            },
            accounts: records.into_iter().map(|r| r.masked_for(role)).collect(),
        },
    }))
}
