//! Status rendering for the panel.

use crate::controller::{Outcome, Status, LOCKED_MARKER};
use crate::core::OperationalState;
use serde::Serialize;

const ACCEPTED_STYLE: &str = "\x1b[37;42m";
const FAULT_STYLE: &str = "\x1b[37;41m";
const RESET: &str = "\x1b[0m";

/// How status lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Label on a green or red background
    #[default]
    Color,
    /// Plain label, for terminals without colour
    Monochrome,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, monochrome: bool) -> Self {
        match (json, monochrome) {
            (true, _) => Self::Json,
            (false, true) => Self::Monochrome,
            (false, false) => Self::Color,
        }
    }
}

/// One JSON status line: the tagged outcome (`outcome`, `state`) sits at
/// the top level next to the label and the status snapshot.
#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    outcome: Option<Outcome>,
    label: &'a str,
    status: Status,
}

/// What the panel shows after a request, or at start-up when `outcome`
/// is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub outcome: Option<Outcome>,
    pub status: Status,
}

impl StatusView {
    /// Label to display. Any rejection shows FAULT.
    pub fn state(&self) -> OperationalState {
        self.outcome
            .map_or(self.status.current, |outcome| outcome.displayed_state())
    }

    pub fn is_locked(&self) -> bool {
        self.status.latched
    }

    fn is_healthy(&self) -> bool {
        self.outcome
            .map_or(!self.status.latched, |outcome| outcome.is_accepted())
    }

    pub fn render(&self, format: OutputFormat) -> String {
        let mut text = self.state().label().to_string();
        if self.is_locked() {
            text.push(' ');
            text.push_str(LOCKED_MARKER);
        }

        match format {
            OutputFormat::Monochrome => text,
            OutputFormat::Color => {
                let style = if self.is_healthy() {
                    ACCEPTED_STYLE
                } else {
                    FAULT_STYLE
                };
                format!("{style} {text} {RESET}")
            }
            OutputFormat::Json => serde_json::to_string(&JsonLine {
                outcome: self.outcome,
                label: self.state().label(),
                status: self.status,
            })
            .unwrap_or_default(),
        }
    }
}
