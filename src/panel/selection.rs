//! Operator selections read from the input stream.

use crate::core::OperationalState;
use std::str::FromStr;
use thiserror::Error;

/// Menu position of the quit entry, after the four states.
pub const QUIT_ORDINAL: u8 = 4;

/// One operator selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Request a transition to this state
    Target(OperationalState),
    /// End the input stream; not a transition request
    Quit,
}

/// Errors produced when input names no selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseSelectionError {
    #[error("Empty selection")]
    Empty,

    #[error("Unknown selection '{0}'")]
    Unknown(String),
}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    /// Accepts `quit`, a state identifier or label, or a menu ordinal
    /// (`0`-`3` for the states, `4` for quit).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseSelectionError::Empty);
        }
        if input.eq_ignore_ascii_case("quit") {
            return Ok(Selection::Quit);
        }
        if let Ok(ordinal) = input.parse::<u8>() {
            if ordinal == QUIT_ORDINAL {
                return Ok(Selection::Quit);
            }
            return OperationalState::from_ordinal(ordinal)
                .map(Selection::Target)
                .ok_or_else(|| ParseSelectionError::Unknown(input.to_string()));
        }
        input
            .parse::<OperationalState>()
            .map(Selection::Target)
            .map_err(|_| ParseSelectionError::Unknown(input.to_string()))
    }
}
