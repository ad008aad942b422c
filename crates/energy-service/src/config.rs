//! Service configuration.

use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// PostgreSQL connection URL (default: `postgres://localhost/energy`).
    pub database_url: String,

    /// Maximum connections in the database pool (default: 5).
    pub database_max_connections: u32,

    /// Append-only log of rejected usage requests (default: "logs/invalid-entries.log").
    pub audit_log_path: PathBuf,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Largest page size a caller may request.
    pub max_page_limit: u32,

    /// Return raw storage error messages to callers instead of a generic one.
    pub expose_storage_errors: bool,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: env_parse("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.database_max_connections),
            audit_log_path: std::env::var("AUDIT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.audit_log_path),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            request_timeout_seconds: env_parse("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
            max_page_limit: env_parse("MAX_PAGE_LIMIT").unwrap_or(defaults.max_page_limit),
            expose_storage_errors: std::env::var("EXPOSE_STORAGE_ERRORS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.expose_storage_errors),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            database_url: "postgres://localhost/energy".into(),
            database_max_connections: 5,
            audit_log_path: PathBuf::from("logs/invalid-entries.log"),
            cors_origins: vec!["*".into()],
            request_timeout_seconds: 30,
            max_page_limit: 1000,
            expose_storage_errors: false,
        }
    }
}
