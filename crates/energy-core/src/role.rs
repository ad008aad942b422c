//! Caller roles and account number masking.

use std::fmt;

/// Number of trailing characters left visible by masking.
const VISIBLE_SUFFIX: usize = 4;

/// Character substituted for hidden account number characters.
const MASK_CHAR: char = '*';

/// The caller's role, used only to pick a masking policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Sees account numbers in full.
    Executive,
    /// Sees masked account numbers.
    #[default]
    Staff,
}

impl Role {
    /// Resolve a caller-supplied role string.
    ///
    /// Only the exact literal `"Executive"` grants the executive role; any
    /// other value, including a missing one, resolves to [`Role::Staff`].
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("Executive") => Self::Executive,
            _ => Self::Staff,
        }
    }

    /// Display form of `account_no` for this role.
    #[must_use]
    pub fn display_account_number(self, account_no: &str) -> String {
        match self {
            Self::Executive => account_no.to_string(),
            Self::Staff => mask_account_number(account_no),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executive => f.write_str("Executive"),
            Self::Staff => f.write_str("Staff"),
        }
    }
}

/// Replace all but the last four characters of `account_no` with `*`.
///
/// Length is preserved in characters. Identifiers of four characters or fewer
/// have nothing to hide and come back unchanged.
#[must_use]
pub fn mask_account_number(account_no: &str) -> String {
    let len = account_no.chars().count();
    let hidden = len.saturating_sub(VISIBLE_SUFFIX);

    account_no
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHAR } else { c })
        .collect()
}
