//! Action history tracking.
//!
//! Every state change is recorded as an immutable [`Action`] linked to the
//! action that caused it. The links are positions in the owning [`History`],
//! so the causal chain can be walked backwards without reference counting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// What produced an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// The state the machine was constructed in
    Initial,
    /// A direct jump via `change_state`
    Change,
    /// An event-driven transition
    Trigger,
    /// A return to the initial state
    Reset,
    /// A step back along the causal chain
    Undo,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Change => "change",
            Self::Trigger => "trigger",
            Self::Reset => "reset",
            Self::Undo => "undo",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an [`Action`] within a [`History`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(usize);

impl ActionId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Record of a single state change.
///
/// Actions are never modified once recorded. The only way an action loses
/// its predecessor is [`History::clear`], which replaces the tail with a
/// detached copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    kind: ActionKind,
    state: String,
    predecessor: Option<ActionId>,
    recorded_at: DateTime<Utc>,
}

impl Action {
    fn new(kind: ActionKind, state: String, predecessor: Option<ActionId>) -> Self {
        Self {
            kind,
            state,
            predecessor,
            recorded_at: Utc::now(),
        }
    }

    fn detached(self) -> Self {
        Self {
            predecessor: None,
            ..self
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The state this action moved the machine to.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The action immediately preceding this one in causal order.
    pub fn predecessor(&self) -> Option<ActionId> {
        self.predecessor
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Ordered, never-empty sequence of [`Action`]s.
///
/// Index 0 is always the root action. Every predecessor link points at a
/// lower index that is still present, because entries are only ever removed
/// from the tail (by [`History::restore`]) or all at once (by
/// [`History::clear`]).
///
/// # Example
///
/// ```rust
/// use waypoint::core::{ActionKind, History};
///
/// let mut history = History::new("normal");
/// history.record(ActionKind::Trigger, "busy");
/// history.record(ActionKind::Trigger, "hungry");
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.get_path(), vec!["normal", "busy", "hungry"]);
/// assert_eq!(history.tail().state(), "hungry");
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    actions: Vec<Action>,
}

impl History {
    /// Create a history holding only the `initial` action.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            actions: vec![Action::new(ActionKind::Initial, initial.into(), None)],
        }
    }

    /// Append an action whose predecessor is the current tail.
    pub fn record(&mut self, kind: ActionKind, state: impl Into<String>) -> ActionId {
        let predecessor = Some(self.tail_id());
        self.push(Action::new(kind, state.into(), predecessor))
    }

    /// Step back along the causal chain.
    ///
    /// Pushes an [`ActionKind::Undo`] action that lands on the tail's
    /// predecessor state and inherits that predecessor's own link. Returns
    /// `None`, leaving the history untouched, when the tail has no
    /// predecessor.
    pub fn rewind(&mut self) -> Option<ActionId> {
        let previous = self.get(self.tail().predecessor?)?;
        let action = Action::new(
            ActionKind::Undo,
            previous.state.clone(),
            previous.predecessor,
        );
        Some(self.push(action))
    }

    /// Drop a trailing undo marker.
    ///
    /// Only a tail of kind [`ActionKind::Undo`] can be removed, and never the
    /// root. Returns the removed action.
    pub fn restore(&mut self) -> Option<Action> {
        if self.can_restore() {
            self.actions.pop()
        } else {
            None
        }
    }

    /// Collapse the history to its tail, severing the tail's predecessor.
    pub fn clear(&mut self) {
        if let Some(tail) = self.actions.pop() {
            self.actions.clear();
            self.actions.push(tail.detached());
        }
    }

    pub fn can_rewind(&self) -> bool {
        self.tail().predecessor.is_some()
    }

    pub fn can_restore(&self) -> bool {
        self.actions.len() > 1 && self.tail().kind == ActionKind::Undo
    }

    /// The most recent action. Its state is the machine's current state.
    pub fn tail(&self) -> &Action {
        &self.actions[self.actions.len() - 1]
    }

    pub fn tail_id(&self) -> ActionId {
        ActionId(self.actions.len() - 1)
    }

    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.0)
    }

    /// All recorded actions, oldest first.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Walk predecessor links from the tail back to a root action.
    ///
    /// Unlike [`History::actions`], this skips anything an undo stepped
    /// over, yielding the causal chain that produced the current state.
    pub fn lineage(&self) -> Lineage<'_> {
        Lineage {
            history: self,
            next: Some(self.tail_id()),
        }
    }

    /// States in recorded order, one per action.
    pub fn get_path(&self) -> Vec<&str> {
        self.actions.iter().map(|action| action.state.as_str()).collect()
    }

    /// Time elapsed between the oldest and newest action.
    ///
    /// Returns `None` only if the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.actions.first()?;
        let last = self.actions.last()?;
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }

    fn push(&mut self, action: Action) -> ActionId {
        self.actions.push(action);
        self.tail_id()
    }
}

/// Iterator over the causal chain, newest first. See [`History::lineage`].
pub struct Lineage<'a> {
    history: &'a History,
    next: Option<ActionId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = (ActionId, &'a Action);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let action = self.history.get(id)?;
        self.next = action.predecessor;
        Some((id, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_initial_action() {
        let history = History::new("normal");

        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.tail().kind(), ActionKind::Initial);
        assert_eq!(history.tail().state(), "normal");
        assert_eq!(history.tail().predecessor(), None);
    }

    #[test]
    fn record_links_to_previous_tail() {
        let mut history = History::new("normal");
        let first = history.tail_id();

        let id = history.record(ActionKind::Trigger, "busy");

        assert_eq!(id.index(), 1);
        assert_eq!(history.tail().predecessor(), Some(first));
        assert_eq!(history.tail().kind(), ActionKind::Trigger);
    }

    #[test]
    fn rewind_points_two_steps_back() {
        let mut history = History::new("normal");
        let busy = history.record(ActionKind::Trigger, "busy");
        history.record(ActionKind::Trigger, "hungry");

        let undo = history.rewind().unwrap();
        let action = history.get(undo).unwrap();

        assert_eq!(action.kind(), ActionKind::Undo);
        assert_eq!(action.state(), "busy");
        assert_eq!(action.predecessor(), history.get(busy).unwrap().predecessor());
    }

    #[test]
    fn rewind_at_root_does_nothing() {
        let mut history = History::new("normal");

        assert!(history.rewind().is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn restore_only_removes_undo_markers() {
        let mut history = History::new("normal");
        history.record(ActionKind::Trigger, "busy");

        assert!(history.restore().is_none());

        history.rewind();
        let removed = history.restore().unwrap();
        assert_eq!(removed.kind(), ActionKind::Undo);
        assert_eq!(history.tail().state(), "busy");
        assert!(history.restore().is_none());
    }

    #[test]
    fn clear_keeps_detached_tail() {
        let mut history = History::new("normal");
        history.record(ActionKind::Trigger, "busy");
        history.record(ActionKind::Change, "sleeping");

        history.clear();

        assert_eq!(history.len(), 1);
        assert_eq!(history.tail().state(), "sleeping");
        assert_eq!(history.tail().kind(), ActionKind::Change);
        assert_eq!(history.tail().predecessor(), None);
        assert!(!history.can_rewind());
    }

    #[test]
    fn lineage_skips_undone_actions() {
        let mut history = History::new("normal");
        history.record(ActionKind::Trigger, "busy");
        history.record(ActionKind::Trigger, "hungry");
        history.rewind();

        let states: Vec<_> = history.lineage().map(|(_, a)| a.state()).collect();
        assert_eq!(states, vec!["busy", "normal"]);
        assert_eq!(history.get_path(), vec!["normal", "busy", "hungry", "busy"]);
    }

    #[test]
    fn duration_covers_recorded_actions() {
        let mut history = History::new("normal");
        std::thread::sleep(std::time::Duration::from_millis(10));
        history.record(ActionKind::Reset, "normal");

        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn action_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ActionKind::Undo).unwrap();
        assert_eq!(json, "\"undo\"");
        assert_eq!(ActionKind::Initial.to_string(), "initial");
    }
}
