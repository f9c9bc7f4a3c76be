//! Core state types and transition rules.
//!
//! This module contains the pure part of the controller:
//! - State definitions via the `State` trait and `OperationalState`
//! - The fixed successor table
//! - Immutable history tracking
//!
//! Nothing here performs I/O.

mod history;
mod state;
mod table;

pub use history::{StateHistory, StateTransition};
pub use state::{OperationalState, State, UnknownStateError};
pub use table::{is_legal, successor, Transition, CYCLE};
