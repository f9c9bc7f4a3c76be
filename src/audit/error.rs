//! Audit sink error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an audit entry.
///
/// These never reach the controller: `AuditSink::append` logs and drops them.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The log file could not be opened for appending
    #[error("Failed to open audit log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry could not be written to an open log
    #[error("Failed to write audit entry to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
