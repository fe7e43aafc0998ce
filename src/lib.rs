//! Waypoint: an event-driven finite state machine with navigable history
//!
//! A machine is configured once with a table of named states, each mapping
//! event names to destination states. From then on it tracks a current
//! state, applies transitions, and records every change in a linear history
//! that supports undo and redo.
//!
//! # Core Concepts
//!
//! - **State table**: Read-only mapping from state to its `event -> state` transitions
//! - **Actions**: Immutable records of each state change, linked to their cause
//! - **History**: The never-empty chain of actions, navigable with undo/redo
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, Fsm};
//!
//! let mut student = Fsm::new(fsm_config! {
//!     initial: normal,
//!     states: {
//!         normal => { study => busy },
//!         busy => { get_tired => sleeping, get_hungry => hungry },
//!         hungry => { eat => normal },
//!         sleeping => { get_hungry => hungry, get_up => normal },
//!     }
//! });
//!
//! student.trigger("study").unwrap();
//! student.trigger("get_hungry").unwrap();
//! assert_eq!(student.state(), "hungry");
//!
//! assert!(student.undo());
//! assert!(student.undo());
//! assert!(!student.undo());
//! assert_eq!(student.state(), "normal");
//!
//! assert!(student.redo());
//! assert_eq!(student.state(), "busy");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, FsmConfig, FsmConfigBuilder};
pub use core::{Action, ActionKind, History, StateDef, StateTable};
pub use engine::{Fsm, FsmError};
