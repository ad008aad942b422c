//! Account listing handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use energy_core::AccountSummary;

use super::ListParams;
use crate::error::ApiError;
use crate::state::AppState;

/// Account attributes as shown to the caller.
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    /// Account number, masked unless the caller is an executive.
    pub account_no: String,
    /// Account type.
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Substation feeding the account.
    pub substation: Option<String>,
    /// Transformer feeding the account.
    pub transformer: Option<String>,
}

/// Account location.
#[derive(Debug, Serialize)]
pub struct Location {
    /// Postal code, `null` when not recorded.
    pub zip_code: Option<String>,
}

/// One entry of the accounts listing.
#[derive(Debug, Serialize)]
pub struct AccountEntry {
    /// Account attributes.
    pub account_info: AccountInfo,
    /// Account location.
    pub location: Location,
}

impl From<AccountSummary> for AccountEntry {
    fn from(summary: AccountSummary) -> Self {
        Self {
            account_info: AccountInfo {
                account_no: summary.account_no,
                account_type: summary.account_type,
                substation: summary.substation,
                transformer: summary.transformer,
            },
            location: Location {
                zip_code: summary.zip_code,
            },
        }
    }
}

/// Accounts listing response.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    /// One page of accounts.
    pub accounts: Vec<AccountEntry>,
}

/// Account number as shown to the caller.
#[derive(Debug, Serialize)]
pub struct AccountNumberInfo {
    /// Account number, masked unless the caller is an executive.
    pub account_no: String,
}

/// One entry of the account number listing.
#[derive(Debug, Serialize)]
pub struct AccountNumberEntry {
    /// Account number.
    pub account_info: AccountNumberInfo,
}

/// Account number listing response.
#[derive(Debug, Serialize)]
pub struct AccountNumbersResponse {
    /// One page of account numbers.
    pub accounts: Vec<AccountNumberEntry>,
}

/// List distinct accounts with their attributes.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<AccountsResponse>, ApiError> {
    let page = state.pagination(params.page.as_deref(), params.limit.as_deref());
    let role = params.role();

    let accounts = state
        .store
        .list_accounts(page)
        .await
        .map_err(|e| ApiError::storage(&e, state.config.expose_storage_errors))?;

    tracing::debug!(
        page = page.page(),
        limit = page.limit(),
        %role,
        returned = accounts.len(),
        "Listed accounts"
    );

    Ok(Json(AccountsResponse {
        accounts: accounts
            .into_iter()
            .map(|a| AccountEntry::from(a.masked_for(role)))
            .collect(),
    }))
}

/// List distinct account numbers.
pub async fn list_account_numbers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<AccountNumbersResponse>, ApiError> {
    let page = state.pagination(params.page.as_deref(), params.limit.as_deref());
    let role = params.role();

    let numbers = state
        .store
        .list_account_numbers(page)
        .await
        .map_err(|e| ApiError::storage(&e, state.config.expose_storage_errors))?;

    Ok(Json(AccountNumbersResponse {
        accounts: numbers
            .iter()
            .map(|n| AccountNumberEntry {
                account_info: AccountNumberInfo {
                    account_no: role.display_account_number(n),
                },
            })
            .collect(),
    }))
}
