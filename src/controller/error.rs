//! Build errors for the controller builder.

use thiserror::Error;

/// Errors that can occur when building a controller.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Audit sink not specified. Call .audit(sink) before .build()")]
    MissingAuditSink,

    #[error("FAULT cannot be an initial state; it is only reachable by an illegal request")]
    FaultInitialState,
}
