//! Storage layer for the energy data API.
//!
//! This crate provides read-only access to the `energy_data` table, which
//! holds one row per account per day:
//!
//! - account attributes: `account_no`, `type`, `substation`, `transformer`, `zip_code`
//! - `date`
//! - 48 half-hourly reading columns named `"00:00"` through `"23:30"`
//!
//! Two backends implement [`Store`]:
//!
//! - [`PgStore`]: PostgreSQL via `sqlx`
//! - [`MemoryStore`]: an in-memory table for tests and local development
//!
//! # Example
//!
//! ```no_run
//! use energy_core::Pagination;
//! use energy_store::{PgStore, Store};
//!
//! # async fn run() -> energy_store::Result<()> {
//! let store = PgStore::connect("postgres://localhost/energy", 5).await?;
//! let accounts = store.list_accounts(Pagination::default()).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;
pub mod postgres;
pub mod schema;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use energy_core::{AccountSummary, DateRange, Pagination, Substation, UsageRecord};

/// The storage trait defining all read operations.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g., PostgreSQL, in-memory for testing).
#[async_trait]
pub trait Store: Send + Sync {
    /// Distinct accounts ordered by account number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_accounts(&self, page: Pagination) -> Result<Vec<AccountSummary>>;

    /// Distinct account numbers in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_account_numbers(&self, page: Pagination) -> Result<Vec<String>>;

    /// Distinct substation/transformer pairs ordered by substation, then transformer.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_substations(&self, page: Pagination) -> Result<Vec<Substation>>;

    /// Daily usage for one account within an inclusive date range, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or a row cannot be decoded.
    async fn account_usage(
        &self,
        account_no: &str,
        range: DateRange,
        page: Pagination,
    ) -> Result<Vec<UsageRecord>>;

    /// Check that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot serve queries.
    async fn ping(&self) -> Result<()>;
}
