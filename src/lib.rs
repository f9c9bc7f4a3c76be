//! Panel interlock: a fault-latching state controller for an
//! approach/launch panel.
//!
//! An operator selects one of a fixed set of states. The controller accepts
//! only the next state in the cycle `SAFE TO APPROACH -> READY TO LAUNCH ->
//! CRAWL -> SAFE TO APPROACH`. Any other request commits the controller to
//! `FAULT` and latches it; once latched, every request is rejected. Each
//! committed outcome is written to an append-only audit log.
//!
//! # Modules
//!
//! - [`core`](crate::core): state types, the successor table and transition history
//! - [`controller`]: the guarded transition engine
//! - [`audit`]: the append-only audit trail
//! - [`config`]: YAML configuration
//! - [`panel`]: line-oriented operator front end
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use panel_interlock::{ControllerHandle, MemoryAuditLog, OperationalState, Outcome};
//!
//! let log = Arc::new(MemoryAuditLog::new());
//! let mut controller = ControllerHandle::new(log.clone());
//!
//! assert_eq!(
//!     controller.request_transition(OperationalState::LaunchReady),
//!     Outcome::Accepted(OperationalState::LaunchReady)
//! );
//! assert_eq!(
//!     controller.request_transition(OperationalState::Fault),
//!     Outcome::RejectedInvalid
//! );
//! assert_eq!(
//!     controller.request_transition(OperationalState::Crawl),
//!     Outcome::RejectedLatched
//! );
//! assert_eq!(log.len(), 2);
//! ```

pub mod audit;
pub mod config;
pub mod controller;
pub mod core;
pub mod panel;

// Re-export commonly used types
pub use audit::{AuditSink, FileAuditLog, MemoryAuditLog};
pub use controller::{ControllerBuilder, ControllerHandle, Outcome, SharedController, Status};
pub use self::core::{OperationalState, State};
