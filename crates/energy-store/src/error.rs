//! Error types for energy data storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// A row could not be mapped onto a domain type.
    #[error("decode error: {0}")]
    Decode(String),

    /// The backend is configured to reject every query.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::Decode(err.to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<energy_core::CoreError> for StoreError {
    fn from(err: energy_core::CoreError) -> Self {
        Self::Decode(err.to_string())
    }
}
