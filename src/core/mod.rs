//! Core data types of the state machine.
//!
//! This module contains the passive data the engine operates on:
//! - The static state table and its transitions
//! - Immutable action records and the history chain linking them
//!
//! Nothing here decides whether a transition is allowed; that belongs to
//! [`crate::engine`].

mod history;
mod table;

pub use history::{Action, ActionId, ActionKind, History, Lineage};
pub use table::{StateDef, StateTable, TableIssue};
