//! Page/limit handling shared by every list endpoint.

use serde::Serialize;

/// Page number used when a request does not supply a usable one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when a request does not supply a usable one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A resolved page request.
///
/// Both fields are always at least 1, so the derived offset is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build a page request from already-validated numbers, clamping each to at least 1.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Resolve raw `page` and `limit` query values.
    ///
    /// Each value is read as a leading integer (`"12abc"` is 12). Missing,
    /// non-numeric and zero values fall back to the defaults; negative values
    /// clamp to 1. `limit` is capped at `max_limit`.
    #[must_use]
    pub fn from_params(page: Option<&str>, limit: Option<&str>, max_limit: u32) -> Self {
        let page = resolve(page, DEFAULT_PAGE);
        let limit = resolve(limit, DEFAULT_LIMIT).min(max_limit.max(1));
        Self::new(page, limit)
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of rows on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip, `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

fn resolve(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(parse_leading_int) {
        None | Some(0) => default,
        Some(n) if n < 0 => 1,
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
    }
}

/// Parse an optional sign followed by decimal digits, ignoring anything after them.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
