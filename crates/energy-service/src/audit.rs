//! Audit log of rejected usage requests.
//!
//! Each rejected request is appended as one JSON line:
//! `{"timestamp": ..., "input": {...}, "errors": [...]}`. The service never
//! reads the file back.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

/// One line of the audit log.
#[derive(Debug, Serialize)]
pub struct InvalidEntry<'a, T: Serialize> {
    /// When the request was rejected, RFC 3339 with milliseconds.
    pub timestamp: String,
    /// The request parameters as received.
    pub input: &'a T,
    /// Validation messages returned to the caller.
    pub errors: &'a [String],
}

/// Append-only audit log.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create a log writing to `path`. Nothing is opened until the first record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record for a rejected request.
    ///
    /// Best effort: failures are logged and swallowed so they never change the
    /// response sent to the caller.
    pub async fn record<T: Serialize>(&self, input: &T, errors: &[String]) {
        if let Err(e) = self.try_record(input, errors).await {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to append to audit log"
            );
        }
    }

    async fn try_record<T: Serialize>(&self, input: &T, errors: &[String]) -> std::io::Result<()> {
        let entry = InvalidEntry {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            input,
            errors,
        };
        let mut line = serde_json::to_vec(&entry)?;
        line.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // A single write on an O_APPEND handle keeps concurrent lines whole.
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        Ok(())
    }
}
