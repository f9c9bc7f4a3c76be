//! In-memory history of committed transitions.
//!
//! History lives only as long as the controller that owns it. The audit
//! log is the durable trace; this is the queryable one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use panel_interlock::core::{OperationalState, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: OperationalState::Approach,
///     to: OperationalState::LaunchReady,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_fault_entry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Create a transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// `true` when this transition moved the controller into an error state.
    pub fn is_fault_entry(&self) -> bool {
        self.to.is_error() && !self.from.is_error()
    }
}

/// Ordered history of committed transitions.
///
/// `record` returns a new history with the transition appended; the
/// original is left untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use panel_interlock::core::{OperationalState, StateHistory, StateTransition};
    ///
    /// let history = StateHistory::new();
    /// let next = history.record(StateTransition::now(
    ///     OperationalState::Approach,
    ///     OperationalState::LaunchReady,
    /// ));
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty()); // Original unchanged
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append in place, dropping the oldest records beyond `limit`.
    ///
    /// Used by owners that mutate their history on every commit and must
    /// not copy it each time.
    pub(crate) fn push(&mut self, transition: StateTransition<S>, limit: usize) {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition, or an empty path if nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
