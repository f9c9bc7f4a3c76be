//! State trait and the panel's operational states.
//!
//! The `State` trait provides pure queries used by history tracking and
//! diagnostics. `OperationalState` is the fixed state set of the panel:
//! three live states in a cycle plus an absorbing fault state.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for controller states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: States are compared by the legality rule
/// - `Debug`: States appear in diagnostics
/// - `Serialize` + `Deserialize`: States appear in status output
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable identifier for the state.
    fn name(&self) -> &str;

    /// Check if this is a final (absorbing) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// Operational state of the approach/launch panel.
///
/// The live states form the cycle
/// `Approach -> LaunchReady -> Crawl -> Approach`. `Fault` sits outside the
/// cycle and has no outgoing transitions.
///
/// # Example
///
/// ```rust
/// use panel_interlock::core::{OperationalState, State};
///
/// let state: OperationalState = "launch_ready".parse().unwrap();
/// assert_eq!(state, OperationalState::LaunchReady);
/// assert_eq!(state.label(), "READY TO LAUNCH");
/// assert!(OperationalState::Fault.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalState {
    #[default]
    Approach,
    LaunchReady,
    Crawl,
    Fault,
}

impl OperationalState {
    /// Every state, in ordinal order.
    pub const ALL: [OperationalState; 4] = [
        OperationalState::Approach,
        OperationalState::LaunchReady,
        OperationalState::Crawl,
        OperationalState::Fault,
    ];

    /// The states that take part in the cycle.
    pub const LIVE: [OperationalState; 3] = [
        OperationalState::Approach,
        OperationalState::LaunchReady,
        OperationalState::Crawl,
    ];

    /// Fixed ordinal, matching the operator menu position.
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Approach => 0,
            Self::LaunchReady => 1,
            Self::Crawl => 2,
            Self::Fault => 3,
        }
    }

    /// Look up a state by its ordinal.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// Human-readable label shown on the panel and written to the audit log.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approach => "SAFE TO APPROACH",
            Self::LaunchReady => "READY TO LAUNCH",
            Self::Crawl => "CRAWL",
            Self::Fault => "FAULT",
        }
    }

    /// `true` for the three states in the cycle.
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Fault)
    }
}

impl State for OperationalState {
    fn name(&self) -> &str {
        match self {
            Self::Approach => "APPROACH",
            Self::LaunchReady => "LAUNCH_READY",
            Self::Crawl => "CRAWL",
            Self::Fault => "FAULT",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Fault)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Fault)
    }
}

impl fmt::Display for OperationalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text names no operational state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown operational state '{0}'")]
pub struct UnknownStateError(pub String);

impl std::str::FromStr for OperationalState {
    type Err = UnknownStateError;

    /// Accepts identifiers (`LAUNCH_READY`) and labels (`READY TO LAUNCH`),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| {
                state.name().eq_ignore_ascii_case(wanted)
                    || state.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownStateError(wanted.to_string()))
    }
}
