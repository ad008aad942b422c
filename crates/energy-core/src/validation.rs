//! Usage query validation.
//!
//! Every field is checked even after an earlier one fails, so a caller sees
//! all of its mistakes in one response.

use chrono::{DateTime, NaiveDate};

use crate::error::{CoreError, Result};
use crate::usage::DateRange;

/// Message reported when `account_no` is absent or empty.
pub const MISSING_ACCOUNT_NO: &str = "Missing account_no";

/// Message reported when `start_date` is absent or unparseable.
pub const INVALID_START_DATE: &str = "Invalid start_date";

/// Message reported when `end_date` is absent or unparseable.
pub const INVALID_END_DATE: &str = "Invalid end_date";

/// Raw usage query fields as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageQuery {
    /// Account to report on.
    pub account_no: Option<String>,
    /// First day of the range, inclusive.
    pub start_date: Option<String>,
    /// Last day of the range, inclusive.
    pub end_date: Option<String>,
}

/// A usage query whose fields all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUsageQuery {
    /// Account to report on.
    pub account_no: String,
    /// Parsed date range.
    pub range: DateRange,
    /// `start_date` exactly as supplied.
    pub start_date: String,
    /// `end_date` exactly as supplied.
    pub end_date: String,
}

impl UsageQuery {
    /// Check every field and collect one message per failure.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidQuery` listing, in field order, each of
    /// `account_no`, `start_date` and `end_date` that is missing or invalid.
    pub fn validate(&self) -> Result<ValidatedUsageQuery> {
        let account_no = non_empty(self.account_no.as_deref());
        let start = non_empty(self.start_date.as_deref()).and_then(parse_date);
        let end = non_empty(self.end_date.as_deref()).and_then(parse_date);

        let mut errors = Vec::new();
        if account_no.is_none() {
            errors.push(MISSING_ACCOUNT_NO.to_string());
        }
        if start.is_none() {
            errors.push(INVALID_START_DATE.to_string());
        }
        if end.is_none() {
            errors.push(INVALID_END_DATE.to_string());
        }

        match (account_no, start, end) {
            (Some(account_no), Some(start), Some(end)) => Ok(ValidatedUsageQuery {
                account_no: account_no.to_string(),
                range: DateRange::new(start, end),
                start_date: self.start_date.clone().unwrap_or_default(),
                end_date: self.end_date.clone().unwrap_or_default(),
            }),
            _ => Err(CoreError::InvalidQuery(errors)),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse an ISO `YYYY-MM-DD` date or an RFC 3339 timestamp.
///
/// Timestamps keep the calendar date in their own offset.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
