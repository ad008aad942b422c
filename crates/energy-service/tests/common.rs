//! Common test utilities for energy service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::NaiveDate;
use tempfile::TempDir;

use energy_core::{AccountSummary, Readings, INTERVALS_PER_DAY};
use energy_service::{create_router, AppState, ServiceConfig};
use energy_store::MemoryStore;

/// Account with a ten-digit number and six days of readings.
pub const RESIDENTIAL: &str = "1234567890";

/// Account with a single day of readings.
pub const COMMERCIAL: &str = "5550001111";

/// Account whose number is too short to mask.
pub const SHORT: &str = "987";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The backing store, kept for inspecting query counts.
    pub store: Arc<MemoryStore>,
    /// Temporary directory for the audit log (kept alive for test duration).
    pub _temp_dir: TempDir,
    /// Where rejected usage requests are written.
    pub audit_log: PathBuf,
}

impl TestHarness {
    /// Create a new test harness over the standard fixture data.
    pub fn new() -> Self {
        Self::build(fixture_store(), |_| {})
    }

    /// Create a harness over a custom store.
    pub fn with_store(store: MemoryStore) -> Self {
        Self::build(store, |_| {})
    }

    /// Create a harness whose store fails every query with `message`.
    pub fn failing(message: &str, expose_storage_errors: bool) -> Self {
        Self::build(fixture_store().with_failure(message), |config| {
            config.expose_storage_errors = expose_storage_errors;
        })
    }

    /// Create a harness with a custom page size cap.
    pub fn with_max_page_limit(max_page_limit: u32) -> Self {
        Self::build(fixture_store(), |config| {
            config.max_page_limit = max_page_limit;
        })
    }

    /// Create a harness whose audit log directory is occupied by a regular file.
    pub fn with_unwritable_audit_log() -> Self {
        let harness = Self::new();
        let parent = harness.audit_log.parent().expect("audit log has a parent");
        std::fs::write(parent, b"blocked").expect("Failed to block audit directory");
        harness
    }

    fn build(store: MemoryStore, configure: impl FnOnce(&mut ServiceConfig)) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let audit_log = temp_dir.path().join("logs").join("invalid-entries.log");

        let mut config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            audit_log_path: audit_log.clone(),
            ..ServiceConfig::default()
        };
        configure(&mut config);

        let store = Arc::new(store);
        let state = AppState::new(store.clone(), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            _temp_dir: temp_dir,
            audit_log,
        }
    }

    /// Lines of the audit log parsed as JSON, or empty if nothing was logged.
    pub fn audit_entries(&self) -> Vec<serde_json::Value> {
        match std::fs::read_to_string(&self.audit_log) {
            Ok(contents) => contents
                .lines()
                .map(|l| serde_json::from_str(l).expect("audit line is JSON"))
                .collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date")
}

/// Readings where interval `i` holds `base + i / 100`.
pub fn readings(base: f64) -> Readings {
    let values = (0..INTERVALS_PER_DAY)
        .map(|i| Some(base + f64::from(u32::try_from(i).unwrap()) / 100.0))
        .collect();
    Readings::from_vec(values).expect("one value per interval")
}

fn account(no: &str, kind: &str, sub: &str, tx: &str, zip: &str) -> AccountSummary {
    AccountSummary {
        account_no: no.into(),
        account_type: Some(kind.into()),
        substation: Some(sub.into()),
        transformer: Some(tx.into()),
        zip_code: Some(zip.into()),
    }
}

/// Fixture table: three accounts over three substation/transformer pairs.
pub fn fixture_store() -> MemoryStore {
    let residential = account(RESIDENTIAL, "Residential", "S1", "T1", "30301");
    let commercial = account(COMMERCIAL, "Commercial", "S2", "T3", "30302");
    let short = account(SHORT, "Residential", "S1", "T2", "30303");

    let mut store = MemoryStore::new();
    for day in ["2024-01-05", "2024-01-01", "2024-01-03", "2024-01-02", "2024-01-04", "2024-02-01"] {
        store = store.with_row(residential.clone(), date(day), readings(1.0));
    }
    store
        .with_row(commercial, date("2024-01-01"), readings(5.0))
        .with_row(short, date("2024-01-01"), readings(0.5))
}
