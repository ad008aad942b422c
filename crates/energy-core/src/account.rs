//! Account and substation projections.
//!
//! Both are read-only views over rows of the usage table.

use serde::Serialize;

use crate::role::Role;

/// Distinct account attributes.
///
/// Attribute columns are nullable in storage and pass through as `None`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountSummary {
    /// Account identifier.
    pub account_no: String,
    /// Account type (residential, commercial, ...).
    pub account_type: Option<String>,
    /// Substation feeding the account.
    pub substation: Option<String>,
    /// Transformer feeding the account.
    pub transformer: Option<String>,
    /// Location of the account.
    pub zip_code: Option<String>,
}

impl AccountSummary {
    /// Return this summary with `account_no` replaced by its display form for `role`.
    #[must_use]
    pub fn masked_for(mut self, role: Role) -> Self {
        self.account_no = role.display_account_number(&self.account_no);
        self
    }
}

/// A distinct substation/transformer pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Substation {
    /// Substation identifier.
    pub substation: Option<String>,
    /// Transformer identifier.
    pub transformer: Option<String>,
}
