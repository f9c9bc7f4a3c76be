//! The state controller.
//!
//! Owns the current operational state and the fault latch, and exposes
//! `request_transition` as the single mutating operation. Every committed
//! outcome writes exactly one audit entry; a request against a latched
//! controller writes none.

pub mod builder;
pub mod error;
mod handle;
mod shared;

pub use builder::ControllerBuilder;
pub use error::BuildError;
pub use handle::{
    ControllerHandle, Outcome, Status, HISTORY_LIMIT, INVALID_TRANSITION_MESSAGE, LOCKED_MARKER,
};
pub use shared::SharedController;
