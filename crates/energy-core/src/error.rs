//! Error types for the energy core crate.

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur while building core values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A usage query failed validation.
    ///
    /// Carries one message per failing field, in field order.
    #[error("invalid usage query: {}", .0.join(", "))]
    InvalidQuery(Vec<String>),

    /// A reading vector did not have one value per interval.
    #[error("expected {expected} readings, got {actual}")]
    ReadingCount {
        /// Number of intervals in a day.
        expected: usize,
        /// Number of readings supplied.
        actual: usize,
    },
}
