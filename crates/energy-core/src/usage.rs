//! Usage record types.
//!
//! A usage record is one account's half-hourly readings for one day.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{CoreError, Result};
use crate::intervals::{interval_labels, INTERVALS_PER_DAY};
use crate::role::Role;

/// One reading per half-hour interval, in interval order.
///
/// Storage may hold NULL for intervals that were never metered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings([Option<f64>; INTERVALS_PER_DAY]);

impl Readings {
    /// A day with no readings.
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; INTERVALS_PER_DAY])
    }

    /// Build from a vector holding exactly one value per interval.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ReadingCount` if `values` is not exactly
    /// [`INTERVALS_PER_DAY`] long.
    pub fn from_vec(values: Vec<Option<f64>>) -> Result<Self> {
        let actual = values.len();
        let array = values.try_into().map_err(|_| CoreError::ReadingCount {
            expected: INTERVALS_PER_DAY,
            actual,
        })?;
        Ok(Self(array))
    }

    /// Iterate over `(label, reading)` pairs in interval order.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, Option<f64>)> + '_ {
        interval_labels()
            .iter()
            .map(String::as_str)
            .zip(self.0.iter().copied())
    }
}

impl Default for Readings {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single day of usage for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    /// Account the readings belong to.
    pub account_no: String,
    /// Day the readings were taken.
    pub date: NaiveDate,
    /// Substation feeding the account, if recorded.
    pub substation: Option<String>,
    /// Transformer feeding the account, if recorded.
    pub transformer: Option<String>,
    /// Half-hourly readings.
    pub readings: Readings,
}

impl UsageRecord {
    /// Return this record with `account_no` replaced by its display form for `role`.
    #[must_use]
    pub fn masked_for(mut self, role: Role) -> Self {
        self.account_no = role.display_account_number(&self.account_no);
        self
    }
}

/// Serialized flat: `account_no`, `date`, one key per interval, then
/// `substation` and `transformer`.
impl Serialize for UsageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(INTERVALS_PER_DAY + 4))?;
        map.serialize_entry("account_no", &self.account_no)?;
        map.serialize_entry("date", &self.date)?;
        for (label, reading) in self.readings.labeled() {
            map.serialize_entry(label, &reading)?;
        }
        map.serialize_entry("substation", &self.substation)?;
        map.serialize_entry("transformer", &self.transformer)?;
        map.end()
    }
}

/// An inclusive range of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range. An inverted range is allowed and matches nothing.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record() -> UsageRecord {
        let mut values = vec![None; INTERVALS_PER_DAY];
        values[0] = Some(0.5);
        values[47] = Some(1.25);
        UsageRecord {
            account_no: "1234567890".into(),
            date: date("2024-01-15"),
            substation: Some("SUB-1".into()),
            transformer: None,
            readings: Readings::from_vec(values).unwrap(),
        }
    }

    #[test]
    fn readings_require_full_day() {
        let err = Readings::from_vec(vec![Some(1.0); 47]).unwrap_err();
        assert_eq!(
            err,
            CoreError::ReadingCount {
                expected: 48,
                actual: 47
            }
        );
    }

    #[test]
    fn record_serializes_flat_with_interval_keys() {
        let json = serde_json::to_value(record()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 52);
        assert_eq!(json["account_no"], "1234567890");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["00:00"], 0.5);
        assert_eq!(json["23:30"], 1.25);
        assert!(json["12:00"].is_null());
        assert_eq!(json["substation"], "SUB-1");
        assert!(json["transformer"].is_null());
    }

    #[test]
    fn masking_only_touches_account_number() {
        let original = record();
        let masked = original.clone().masked_for(Role::Staff);

        assert_eq!(masked.account_no, "******7890");
        assert_eq!(masked.readings, original.readings);
        assert_eq!(masked.substation, original.substation);
        assert_eq!(masked.date, original.date);
    }

    #[test]
    fn range_is_inclusive() {
        let range = DateRange::new(date("2024-01-01"), date("2024-01-31"));
        assert!(range.contains(date("2024-01-01")));
        assert!(range.contains(date("2024-01-31")));
        assert!(!range.contains(date("2024-02-01")));
        assert!(!range.contains(date("2023-12-31")));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = DateRange::new(date("2024-02-01"), date("2024-01-01"));
        assert!(!range.contains(date("2024-01-15")));
    }
}
