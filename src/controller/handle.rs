//! The guarded transition engine.

use crate::audit::AuditSink;
use crate::core::{successor, OperationalState, State, StateHistory, StateTransition};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Audit text written when an illegal request latches the controller.
pub const INVALID_TRANSITION_MESSAGE: &str =
    "Invalid state transition attempted, entering FAULT state";

/// Number of committed transitions a controller keeps in memory. Older
/// records are dropped; the audit log keeps the full trail.
pub const HISTORY_LIMIT: usize = 1024;

/// Marker rendered after the label while the controller is latched.
pub const LOCKED_MARKER: &str = "[LOCKED]";

/// Result of a single transition request.
///
/// Rejections are modelled outcomes, not errors: the engine itself never
/// fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "state", rename_all = "snake_case")]
pub enum Outcome {
    /// The request matched the successor and was committed
    Accepted(OperationalState),

    /// The controller was already latched; nothing was evaluated
    RejectedLatched,

    /// The request was illegal; the controller committed to FAULT and latched
    RejectedInvalid,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The state a renderer should show for this outcome.
    ///
    /// Any rejection renders as `Fault`, so an operator cannot mistake it
    /// for a no-op.
    pub fn displayed_state(&self) -> OperationalState {
        match self {
            Self::Accepted(state) => *state,
            Self::RejectedLatched | Self::RejectedInvalid => OperationalState::Fault,
        }
    }
}

/// Consistent snapshot of the controller's `(current, latched)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub current: OperationalState,
    pub latched: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.latched {
            write!(f, "{} {LOCKED_MARKER}", self.current)
        } else {
            write!(f, "{}", self.current)
        }
    }
}

/// Owned controller state: the current state, the fault latch, the
/// committed history and the audit capability.
///
/// A fresh handle starts at `Approach`, unlatched.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use panel_interlock::audit::MemoryAuditLog;
/// use panel_interlock::controller::{ControllerHandle, Outcome};
/// use panel_interlock::core::OperationalState;
///
/// let log = Arc::new(MemoryAuditLog::new());
/// let mut controller = ControllerHandle::new(log.clone());
///
/// let outcome = controller.request_transition(OperationalState::LaunchReady);
/// assert_eq!(outcome, Outcome::Accepted(OperationalState::LaunchReady));
///
/// let outcome = controller.request_transition(OperationalState::Approach);
/// assert_eq!(outcome, Outcome::RejectedInvalid);
/// assert!(controller.is_latched());
/// assert_eq!(log.len(), 2);
/// ```
pub struct ControllerHandle {
    current: OperationalState,
    latched: bool,
    history: StateHistory<OperationalState>,
    audit: Arc<dyn AuditSink>,
}

impl ControllerHandle {
    /// Create a controller at `Approach`, unlatched.
    pub fn new(audit: Arc<dyn AuditSink>) -> Self {
        Self::starting_at(OperationalState::Approach, audit)
    }

    /// Callers must not pass `Fault`; the builder enforces this.
    pub(crate) fn starting_at(initial: OperationalState, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            current: initial,
            latched: false,
            history: StateHistory::new(),
            audit,
        }
    }

    /// Validate `target` against the cycle and apply or reject it.
    ///
    /// - latched: `RejectedLatched`, no mutation, no audit entry
    /// - `target` is the successor: commit it, audit its label
    /// - anything else: commit `Fault`, latch, audit the invalid-transition
    ///   message
    pub fn request_transition(&mut self, target: OperationalState) -> Outcome {
        if self.latched {
            tracing::debug!(requested = target.name(), "Transition rejected, controller latched");
            return Outcome::RejectedLatched;
        }

        let from = self.current;
        if successor(from) == Some(target) {
            self.commit(from, target, false);
            tracing::info!(from = from.name(), to = target.name(), "Transition accepted");
            self.audit.append(target.label());
            Outcome::Accepted(target)
        } else {
            self.commit(from, OperationalState::Fault, true);
            tracing::warn!(
                from = from.name(),
                requested = target.name(),
                "Illegal transition requested, entering FAULT"
            );
            self.audit.append(INVALID_TRANSITION_MESSAGE);
            Outcome::RejectedInvalid
        }
    }

    // The only place `current` and `latched` are written.
    fn commit(&mut self, from: OperationalState, to: OperationalState, latched: bool) {
        self.current = to;
        self.latched = latched;
        self.history
            .push(StateTransition::now(from, to), HISTORY_LIMIT);
    }

    /// Get current state (pure)
    pub fn current(&self) -> OperationalState {
        self.current
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn status(&self) -> Status {
        Status {
            current: self.current,
            latched: self.latched,
        }
    }

    /// The most recent committed transitions, at most `HISTORY_LIMIT`.
    pub fn history(&self) -> &StateHistory<OperationalState> {
        &self.history
    }

    /// The audit capability this controller writes through.
    pub fn audit(&self) -> &Arc<dyn AuditSink> {
        &self.audit
    }
}

impl fmt::Debug for ControllerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerHandle")
            .field("current", &self.current)
            .field("latched", &self.latched)
            .field("transitions", &self.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemoryAuditLog;
    use crate::core::OperationalState::*;

    fn controller() -> (ControllerHandle, Arc<MemoryAuditLog>) {
        let log = Arc::new(MemoryAuditLog::new());
        (ControllerHandle::new(log.clone()), log)
    }

    fn status(current: OperationalState, latched: bool) -> Status {
        Status { current, latched }
    }

    #[test]
    fn starts_at_approach_unlatched() {
        let (controller, log) = controller();
        assert_eq!(controller.status(), status(Approach, false));
        assert!(controller.history().is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn accepts_successor() {
        let (mut controller, log) = controller();

        let outcome = controller.request_transition(LaunchReady);

        assert_eq!(outcome, Outcome::Accepted(LaunchReady));
        assert_eq!(controller.status(), status(LaunchReady, false));
        assert_eq!(log.messages(), vec!["READY TO LAUNCH"]);
    }

    #[test]
    fn out_of_order_request_latches_fault() {
        let (mut controller, log) = controller();
        controller.request_transition(LaunchReady);

        let outcome = controller.request_transition(Approach);

        assert_eq!(outcome, Outcome::RejectedInvalid);
        assert_eq!(controller.status(), status(Fault, true));
        assert_eq!(log.messages(), vec!["READY TO LAUNCH", INVALID_TRANSITION_MESSAGE]);
    }

    #[test]
    fn latched_controller_rejects_without_audit() {
        let (mut controller, log) = controller();
        controller.request_transition(Crawl);
        assert_eq!(log.len(), 1);

        let outcome = controller.request_transition(Crawl);

        assert_eq!(outcome, Outcome::RejectedLatched);
        assert_eq!(controller.status(), status(Fault, true));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn cycle_wraps_from_crawl_to_approach() {
        let (mut controller, log) = controller();
        controller.request_transition(LaunchReady);
        controller.request_transition(Crawl);
        assert_eq!(controller.status(), status(Crawl, false));

        let outcome = controller.request_transition(Approach);

        assert_eq!(outcome, Outcome::Accepted(Approach));
        assert_eq!(controller.status(), status(Approach, false));
        assert_eq!(
            log.messages(),
            vec!["READY TO LAUNCH", "CRAWL", "SAFE TO APPROACH"]
        );
    }

    #[test]
    fn direct_fault_request_is_invalid() {
        let (mut controller, log) = controller();

        let outcome = controller.request_transition(Fault);

        assert_eq!(outcome, Outcome::RejectedInvalid);
        assert_eq!(controller.status(), status(Fault, true));
        assert_eq!(log.messages(), vec![INVALID_TRANSITION_MESSAGE]);
    }

    // Guards against the illegal target overwriting the fault it triggered.
    #[test]
    fn illegal_target_is_never_committed() {
        for target in [Approach, Crawl, Fault] {
            let (mut controller, _log) = controller();

            controller.request_transition(target);

            assert_eq!(controller.current(), Fault, "target {target:?}");
            assert!(controller.is_latched(), "target {target:?}");
        }
    }

    #[test]
    fn history_tracks_commits_only() {
        let (mut controller, _log) = controller();
        controller.request_transition(LaunchReady);
        controller.request_transition(LaunchReady);
        controller.request_transition(Crawl);

        let path = controller.history().get_path();
        assert_eq!(path, vec![&Approach, &LaunchReady, &Fault]);
        assert!(controller.history().last().unwrap().is_fault_entry());
    }

    #[test]
    fn history_is_bounded_under_continuous_cycling() {
        let (mut controller, log) = controller();
        let cycle = [LaunchReady, Crawl, Approach];

        for i in 0..(HISTORY_LIMIT * 3 + 2) {
            let target = cycle[i % 3];
            assert_eq!(controller.request_transition(target), Outcome::Accepted(target));
        }

        assert_eq!(controller.history().len(), HISTORY_LIMIT);
        assert_eq!(controller.history().last().unwrap().to, controller.current());
        assert_eq!(log.len(), HISTORY_LIMIT * 3 + 2);
    }

    #[test]
    fn outcome_displays_fault_for_rejections() {
        assert_eq!(Outcome::Accepted(Crawl).displayed_state(), Crawl);
        assert_eq!(Outcome::RejectedLatched.displayed_state(), Fault);
        assert_eq!(Outcome::RejectedInvalid.displayed_state(), Fault);
        assert!(Outcome::Accepted(Crawl).is_accepted());
        assert!(!Outcome::RejectedInvalid.is_accepted());
    }

    #[test]
    fn status_display_marks_lock() {
        assert_eq!(status(Crawl, false).to_string(), "CRAWL");
        assert_eq!(status(Fault, true).to_string(), "FAULT [LOCKED]");
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_string(&Outcome::Accepted(LaunchReady)).unwrap();
        assert_eq!(json, r#"{"outcome":"accepted","state":"LAUNCH_READY"}"#);

        let json = serde_json::to_string(&Outcome::RejectedLatched).unwrap();
        assert_eq!(json, r#"{"outcome":"rejected_latched"}"#);
    }
}
