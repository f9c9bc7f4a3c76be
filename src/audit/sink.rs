//! Audit sinks: the write-only capability the controller records through.

use super::entry::AuditEntry;
use super::error::AuditError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Default file name of the audit log, relative to the working directory.
pub const DEFAULT_AUDIT_PATH: &str = "state.log";

/// Append-only audit target.
///
/// Implementors provide `try_append`. Callers use `append`, which never
/// fails: a missing or unwritable target degrades the trail, never the
/// controller.
pub trait AuditSink: Send + Sync {
    /// Write one entry, reporting failure.
    fn try_append(&self, entry: &AuditEntry) -> Result<(), AuditError>;

    /// Stamp `message` with the current time and write it, swallowing
    /// errors with a tracing warning.
    fn append(&self, message: &str) {
        let entry = AuditEntry::now(message);
        if let Err(e) = self.try_append(&entry) {
            tracing::warn!(error = %e, entry = %entry.message, "Failed to write audit entry");
        }
    }
}

/// Audit log backed by a text file.
///
/// The file is opened in append mode for every entry and closed again, so
/// the log can be rotated or removed while the panel runs.
#[derive(Clone, Debug)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileAuditLog {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_PATH)
    }
}

impl AuditSink for FileAuditLog {
    fn try_append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| AuditError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{entry}").map_err(|source| AuditError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Audit log held in memory.
///
/// Useful when embedding the controller in a host that ships entries
/// elsewhere, and for inspecting the trail in tests.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entry messages in order, without timestamps.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    /// Entries rendered exactly as a file sink would write them.
    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditLog {
    fn try_append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_records_in_order() {
        let log = MemoryAuditLog::new();
        log.append("SAFE TO APPROACH");
        log.append("READY TO LAUNCH");

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages(), vec!["SAFE TO APPROACH", "READY TO LAUNCH"]);
        assert!(log.lines()[1].ends_with("] READY TO LAUNCH"));
    }

    #[test]
    fn file_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.log");
        let log = FileAuditLog::new(&path);

        log.append("CRAWL");
        log.append("SAFE TO APPROACH");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] CRAWL"));
        assert!(lines[1].ends_with("] SAFE TO APPROACH"));
    }

    #[test]
    fn file_log_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileAuditLog::new(dir.path().join("missing").join("state.log"));

        let result = log.try_append(&AuditEntry::now("CRAWL"));
        assert!(matches!(result, Err(AuditError::Open { .. })));
    }

    #[test]
    fn append_swallows_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileAuditLog::new(dir.path().join("missing").join("state.log"));

        // Must not panic or surface the error.
        log.append("CRAWL");
        assert!(!log.path().exists());
    }

    #[test]
    fn default_path_is_state_log() {
        assert_eq!(FileAuditLog::default().path(), Path::new("state.log"));
    }
}
