//! Energy Data HTTP API Service.
//!
//! This crate provides read-only HTTP access to energy usage data:
//!
//! - Account and account number listings
//! - Substation listings
//! - Per-account half-hourly usage within a date range
//! - Dashboard navigation model and hourly usage forecast
//!
//! # Account number masking
//!
//! Account numbers are masked to their last four characters unless the
//! caller's `role` query parameter is exactly `Executive`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Handlers need async for the router

pub mod audit;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use audit::AuditLog;
pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
