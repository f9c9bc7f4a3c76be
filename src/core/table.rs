//! Fixed transition table for the operational cycle.
//!
//! Legality is a table lookup: each live state has exactly one successor.
//! `Fault` has no row, so nothing is ever legal from it.

use super::state::OperationalState;

/// A single legal edge of the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: OperationalState,
    pub to: OperationalState,
}

impl Transition {
    /// Check if this edge applies to a request from `current` to `target` (pure)
    pub fn matches(&self, current: OperationalState, target: OperationalState) -> bool {
        self.from == current && self.to == target
    }
}

/// The cycle `Approach -> LaunchReady -> Crawl -> Approach`.
pub const CYCLE: [Transition; 3] = [
    Transition {
        from: OperationalState::Approach,
        to: OperationalState::LaunchReady,
    },
    Transition {
        from: OperationalState::LaunchReady,
        to: OperationalState::Crawl,
    },
    Transition {
        from: OperationalState::Crawl,
        to: OperationalState::Approach,
    },
];

/// The unique legal successor of `state`, or `None` for `Fault`.
///
/// # Example
///
/// ```rust
/// use panel_interlock::core::{successor, OperationalState};
///
/// assert_eq!(successor(OperationalState::Crawl), Some(OperationalState::Approach));
/// assert_eq!(successor(OperationalState::Fault), None);
/// ```
pub fn successor(state: OperationalState) -> Option<OperationalState> {
    CYCLE.iter().find(|t| t.from == state).map(|t| t.to)
}

/// Whether a request from `current` to `target` follows the cycle.
pub fn is_legal(current: OperationalState, target: OperationalState) -> bool {
    CYCLE.iter().any(|t| t.matches(current, target))
}
