//! Builder for constructing controllers.

use crate::audit::AuditSink;
use crate::controller::error::BuildError;
use crate::controller::handle::ControllerHandle;
use crate::core::OperationalState;
use std::sync::Arc;

/// Builder for constructing a controller with a fluent API.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use panel_interlock::audit::MemoryAuditLog;
/// use panel_interlock::controller::ControllerBuilder;
/// use panel_interlock::core::OperationalState;
///
/// let controller = ControllerBuilder::new()
///     .initial(OperationalState::Crawl)
///     .audit(Arc::new(MemoryAuditLog::new()))
///     .build()
///     .unwrap();
///
/// assert_eq!(controller.current(), OperationalState::Crawl);
/// ```
#[derive(Default)]
pub struct ControllerBuilder {
    initial: Option<OperationalState>,
    audit: Option<Arc<dyn AuditSink>>,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (optional, defaults to `Approach`).
    pub fn initial(mut self, state: OperationalState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the audit sink (required).
    pub fn audit(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Build the controller.
    /// Returns an error if the sink is missing or the initial state is `Fault`.
    pub fn build(self) -> Result<ControllerHandle, BuildError> {
        let audit = self.audit.ok_or(BuildError::MissingAuditSink)?;
        let initial = self.initial.unwrap_or_default();

        if !initial.is_live() {
            return Err(BuildError::FaultInitialState);
        }

        Ok(ControllerHandle::starting_at(initial, audit))
    }
}
