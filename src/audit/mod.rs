//! Append-only audit trail.
//!
//! Every committed transition is written as one `[<timestamp>] <event>`
//! line. The controller only ever writes through the `AuditSink`
//! capability and never reads the trail back.
//!
//! # Example
//!
//! ```rust
//! use panel_interlock::audit::{AuditSink, MemoryAuditLog};
//!
//! let log = MemoryAuditLog::new();
//! log.append("SAFE TO APPROACH");
//! assert_eq!(log.messages(), vec!["SAFE TO APPROACH"]);
//! ```

mod entry;
pub mod error;
mod sink;

pub use entry::{AuditEntry, TIMESTAMP_FORMAT};
pub use error::AuditError;
pub use sink::{AuditSink, FileAuditLog, MemoryAuditLog, DEFAULT_AUDIT_PATH};
