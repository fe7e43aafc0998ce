//! Errors raised by machine operations.

use thiserror::Error;

/// Errors that can occur when moving a machine between states.
///
/// Either error leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Unknown state '{state}'")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },
}
