//! Audit entry representation and line format.

use chrono::{DateTime, Local};
use std::fmt;

/// ctime-style timestamp, e.g. `Sat Oct 17 09:05:03 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// One timestamped audit record.
///
/// Renders as a single log line: `[<timestamp>] <message>`.
///
/// # Example
///
/// ```rust
/// use chrono::{Local, TimeZone};
/// use panel_interlock::audit::AuditEntry;
///
/// let timestamp = Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
/// let entry = AuditEntry::at(timestamp, "CRAWL");
/// assert_eq!(entry.to_string(), "[Sat Oct 17 09:05:03 2026] CRAWL");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message)
    }

    pub fn at(timestamp: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}
