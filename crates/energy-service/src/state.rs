//! Application state.

use std::sync::Arc;

use energy_core::Pagination;
use energy_store::Store;

use crate::audit::AuditLog;
use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The storage backend.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,

    /// Log of rejected usage requests.
    pub audit: AuditLog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        let audit = AuditLog::new(config.audit_log_path.clone());

        tracing::info!(
            audit_log = %audit.path().display(),
            max_page_limit = config.max_page_limit,
            expose_storage_errors = config.expose_storage_errors,
            "Application state initialised"
        );

        Self {
            store,
            config,
            audit,
        }
    }

    /// Resolve raw `page`/`limit` parameters against the configured cap.
    #[must_use]
    pub fn pagination(&self, page: Option<&str>, limit: Option<&str>) -> Pagination {
        Pagination::from_params(page, limit, self.config.max_page_limit)
    }
}
