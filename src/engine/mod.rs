//! The state machine engine.
//!
//! [`Fsm`] validates requested moves against its [`StateTable`](crate::core::StateTable),
//! records each accepted move in its [`History`](crate::core::History), and
//! navigates that history for undo and redo.

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
