//! API handlers.

use serde::Deserialize;

use energy_core::Role;

pub mod accounts;
pub mod dashboard;
pub mod health;
pub mod substations;
pub mod usage;

/// Query parameters shared by the list endpoints.
///
/// Values stay as raw strings so malformed numbers fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size.
    pub limit: Option<String>,
    /// Caller role, `Executive` or anything else.
    pub role: Option<String>,
}

impl ListParams {
    /// The caller's role.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_param(self.role.as_deref())
    }
}
