//! Half-hour interval labels.
//!
//! Every usage row carries one reading per 30-minute interval of the day. The
//! labels double as column names in storage and as keys in JSON responses, so
//! they are generated once and shared by both sides.

use std::sync::OnceLock;

/// Number of half-hour intervals in a day.
pub const INTERVALS_PER_DAY: usize = 48;

const MINUTES_PER_INTERVAL: usize = 30;

/// Label for the interval at `index`, formatted `HH:MM`.
///
/// # Panics
///
/// Panics if `index >= INTERVALS_PER_DAY`.
#[must_use]
pub fn interval_label(index: usize) -> String {
    assert!(index < INTERVALS_PER_DAY, "interval index out of range: {index}");
    let minutes = index * MINUTES_PER_INTERVAL;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// All interval labels in chronological order, `"00:00"` through `"23:30"`.
#[must_use]
pub fn interval_labels() -> &'static [String] {
    static LABELS: OnceLock<Vec<String>> = OnceLock::new();
    LABELS.get_or_init(|| (0..INTERVALS_PER_DAY).map(interval_label).collect())
}
