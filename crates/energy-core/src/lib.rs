//! Core types and utilities for the energy data API.
//!
//! This crate provides the foundational types used by the store and service crates:
//!
//! - **Intervals**: the 48 half-hour labels shared by queries and responses
//! - **Records**: `UsageRecord`, `AccountSummary`, `Substation`
//! - **Access**: `Role` and account number masking
//! - **Requests**: `Pagination`, `UsageQuery` validation
//! - **Dashboard**: `Navigation` model and the hourly usage `Forecast`
//!
//! Nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod error;
pub mod forecast;
pub mod intervals;
pub mod navigation;
pub mod pagination;
pub mod role;
pub mod usage;
pub mod validation;

pub use account::{AccountSummary, Substation};
pub use error::{CoreError, Result};
pub use forecast::Forecast;
pub use intervals::{interval_label, interval_labels, INTERVALS_PER_DAY};
pub use navigation::{AuthAction, NavLink, Navigation};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use role::{mask_account_number, Role};
pub use usage::{DateRange, Readings, UsageRecord};
pub use validation::{parse_date, UsageQuery, ValidatedUsageQuery};
