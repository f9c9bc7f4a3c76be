//! Line-oriented operator panel.
//!
//! Reads one selection per line, submits it to the controller and writes
//! one status line back. The panel holds no invariants of its own; it
//! only translates between text and the controller interface.

mod selection;
mod view;

pub use selection::{ParseSelectionError, Selection, QUIT_ORDINAL};
pub use view::{OutputFormat, StatusView};

use crate::audit::FileAuditLog;
use crate::config::PanelConfig;
use crate::controller::{ControllerHandle, Outcome};
use crate::core::OperationalState;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Drives a controller from a stream of operator selections.
#[derive(Debug)]
pub struct Panel {
    controller: ControllerHandle,
    format: OutputFormat,
    log_latched_rejections: bool,
}

impl Panel {
    pub fn new(controller: ControllerHandle, format: OutputFormat) -> Self {
        Self {
            controller,
            format,
            log_latched_rejections: false,
        }
    }

    /// Build a panel writing its audit trail to the configured file.
    pub fn from_config(config: &PanelConfig, format: OutputFormat) -> Self {
        let audit = Arc::new(FileAuditLog::new(config.audit.path.clone()));
        Self::new(ControllerHandle::new(audit), format)
            .log_latched_rejections(config.audit.log_latched_rejections)
    }

    /// Also audit requests rejected because the controller is latched.
    pub fn log_latched_rejections(mut self, enabled: bool) -> Self {
        self.log_latched_rejections = enabled;
        self
    }

    pub fn controller(&self) -> &ControllerHandle {
        &self.controller
    }

    /// What to show before any request is made.
    pub fn initial_view(&self) -> StatusView {
        StatusView {
            outcome: None,
            status: self.controller.status(),
        }
    }

    /// Submit one transition request.
    pub fn submit(&mut self, target: OperationalState) -> StatusView {
        let outcome = self.controller.request_transition(target);

        if outcome == Outcome::RejectedLatched && self.log_latched_rejections {
            self.controller.audit().append(&format!(
                "Transition to {} rejected, controller latched in FAULT state",
                target.label()
            ));
        }

        StatusView {
            outcome: Some(outcome),
            status: self.controller.status(),
        }
    }

    /// Process `input` until `quit` or end of stream, writing one line to
    /// `output` at start-up and one per request or unrecognised line.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and reported as
    /// unknown selections; they never end the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.initial_view().render(self.format))?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            match line.parse::<Selection>() {
                Ok(Selection::Quit) => {
                    tracing::debug!("Quit selected");
                    break;
                }
                Ok(Selection::Target(target)) => {
                    let view = self.submit(target);
                    writeln!(output, "{}", view.render(self.format))?;
                }
                Err(ParseSelectionError::Empty) => continue,
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring input");
                    writeln!(output, "{}", self.render_error(&e))?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }

    fn render_error(&self, error: &ParseSelectionError) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({ "error": error.to_string() }).to_string(),
            OutputFormat::Color | OutputFormat::Monochrome => format!("Error: {error}"),
        }
    }
}
