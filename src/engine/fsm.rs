//! Event-driven state machine with undo/redo history.

use crate::builder::FsmConfig;
use crate::core::{ActionKind, History, StateTable};
use crate::engine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A finite state machine over a shared, read-only [`StateTable`].
///
/// The current state is always the state of the newest action in
/// [`Fsm::history`]. Rejected operations never touch the history.
///
/// # Example
///
/// ```rust
/// use waypoint::fsm_config;
/// use waypoint::engine::{Fsm, FsmError};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: normal,
///     states: {
///         normal => { study => busy },
///         busy => { get_hungry => hungry },
///         hungry => { eat => normal },
///     }
/// });
///
/// fsm.trigger("study").unwrap();
/// fsm.trigger("get_hungry").unwrap();
/// assert_eq!(fsm.state(), "hungry");
///
/// assert!(matches!(fsm.trigger("study"), Err(FsmError::NoTransition { .. })));
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "busy");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "hungry");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    table: Arc<StateTable>,
    initial: String,
    history: History,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    pub fn new(config: FsmConfig) -> Self {
        Self::with_table(config.initial, Arc::new(config.states))
    }

    /// Create a machine over a table that may be shared with other machines.
    ///
    /// `initial` is not checked against the table. A machine started in an
    /// undeclared state works, but no event can be triggered from it.
    pub fn with_table(initial: impl Into<String>, table: Arc<StateTable>) -> Self {
        let initial = initial.into();
        if !table.contains(&initial) {
            warn!(initial = %initial, "Initial state is not declared in the state table");
        }

        let history = History::new(initial.clone());
        debug!(kind = %ActionKind::Initial, state = %initial, "Recorded action");

        Self {
            table,
            initial,
            history,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        self.history.tail().state()
    }

    /// The state the machine was constructed in.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    pub fn table(&self) -> &Arc<StateTable> {
        &self.table
    }

    /// Get action history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump directly to `target`, ignoring transitions.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not declared.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.table.contains(target) {
            debug!(state = %self.state(), target = %target, "Rejected change to unknown state");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        self.record(ActionKind::Change, target.to_string());
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`FsmError::NoTransition`] if the current state has no such
    /// transition, which includes a current state the table does not declare.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(destination) = self.table.destination(self.state(), event) else {
            debug!(state = %self.state(), event = %event, "Rejected event without transition");
            return Err(FsmError::NoTransition {
                state: self.state().to_string(),
                event: event.to_string(),
            });
        };

        let destination = destination.to_string();
        self.record(ActionKind::Trigger, destination);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// This records a new action; earlier history stays reachable via undo.
    pub fn reset(&mut self) {
        self.record(ActionKind::Reset, self.initial.clone());
    }

    /// States that handle `event`.
    ///
    /// Falls back to every declared state when no state handles the event
    /// and no event was given. An event nobody handles yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        let handling: Vec<&str> = match event {
            Some(event) => self
                .table
                .iter()
                .filter(|(_, def)| def.handles(event))
                .map(|(name, _)| name)
                .collect(),
            None => Vec::new(),
        };

        if !handling.is_empty() {
            return handling;
        }
        if event.is_none() {
            return self.table.names().collect();
        }
        Vec::new()
    }

    /// Step back to the state before the current one.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// step back to.
    pub fn undo(&mut self) -> bool {
        match self.history.rewind() {
            Some(id) => {
                debug!(
                    kind = %ActionKind::Undo,
                    state = %self.state(),
                    action = %id,
                    "Recorded action"
                );
                true
            }
            None => {
                trace!(state = %self.state(), "Nothing to undo");
                false
            }
        }
    }

    /// Reverse an immediately preceding [`Fsm::undo`].
    ///
    /// Only a single trailing undo can be reversed; a second `redo` without
    /// an intervening `undo` returns `false`.
    pub fn redo(&mut self) -> bool {
        match self.history.restore() {
            Some(_) => {
                debug!(state = %self.state(), "Reverted undo");
                true
            }
            None => {
                trace!(state = %self.state(), "Nothing to redo");
                false
            }
        }
    }

    /// Forget everything but the current action.
    ///
    /// The current state is kept; [`Fsm::undo`] returns `false` until the
    /// next state change.
    pub fn clear_history(&mut self) {
        let discarded = self.history.len() - 1;
        self.history.clear();
        debug!(state = %self.state(), discarded, "Cleared history");
    }

    /// Whether [`Fsm::undo`] would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_rewind()
    }

    /// Whether [`Fsm::redo`] would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_restore()
    }

    fn record(&mut self, kind: ActionKind, state: String) {
        let predecessor = self.history.tail_id();
        let id = self.history.record(kind, state);
        debug!(
            kind = %kind,
            state = %self.state(),
            action = %id,
            predecessor = %predecessor,
            "Recorded action"
        );
    }
}
