//! The static state table.
//!
//! A table maps each state name to the transitions it offers. It is loaded
//! once, never mutated afterwards, and can be shared between machines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Outgoing transitions of a single state, keyed by event name.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateDef;
///
/// let normal = StateDef::new().on("study", "busy");
/// assert_eq!(normal.destination("study"), Some("busy"));
/// assert_eq!(normal.destination("sleep"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name -> destination state name
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<String>, destination: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), destination.into());
        self
    }

    /// Destination for `event`, if this state handles it.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Findings reported by [`StateTable::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("Transition '{event}' from '{state}' targets unknown state '{destination}'")]
    DanglingDestination {
        state: String,
        event: String,
        destination: String,
    },

    #[error("Initial state '{initial}' is not declared in the table")]
    UnknownInitial { initial: String },
}

/// Mapping from state name to its [`StateDef`], in declaration order.
///
/// Lookups return `Option` rather than panicking: a machine may sit in a
/// state the table does not know (an undeclared initial state), and every
/// lookup against it simply finds nothing.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateDef, StateTable};
///
/// let mut table = StateTable::new();
/// table.insert("normal", StateDef::new().on("study", "busy"));
/// table.insert("busy", StateDef::new().on("get_hungry", "hungry"));
///
/// assert_eq!(table.destination("normal", "study"), Some("busy"));
/// assert_eq!(table.destination("hungry", "eat"), None);
/// assert_eq!(table.names().collect::<Vec<_>>(), vec!["normal", "busy"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    states: IndexMap<String, StateDef>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or replace) a state.
    pub fn insert(&mut self, name: impl Into<String>, def: StateDef) {
        self.states.insert(name.into(), def);
    }

    pub(crate) fn entry_mut(&mut self, name: impl Into<String>) -> &mut StateDef {
        self.states.entry(name.into()).or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    /// Resolve the destination of `event` from `state`.
    ///
    /// A missing state and a missing transition are indistinguishable here.
    pub fn destination(&self, state: &str, event: &str) -> Option<&str> {
        self.get(state).and_then(|def| def.destination(event))
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    /// Distinct event names, in the order they are first declared.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = Vec::new();
        for def in self.states.values() {
            for event in def.transitions.keys() {
                if !events.contains(&event.as_str()) {
                    events.push(event);
                }
            }
        }
        events
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check the table for references to undeclared states.
    ///
    /// Every issue is collected rather than stopping at the first one. This
    /// is advisory: machines accept unvalidated tables and only fail when a
    /// dangling reference is actually reached.
    pub fn validate(&self, initial: &str) -> Validation<(), NonEmptyVec<TableIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableIssue>>> = Vec::new();

        if !self.contains(initial) {
            checks.push(Validation::fail(TableIssue::UnknownInitial {
                initial: initial.to_string(),
            }));
        }

        for (state, def) in &self.states {
            for (event, destination) in &def.transitions {
                let check = if self.contains(destination) {
                    Validation::success(())
                } else {
                    Validation::fail(TableIssue::DanglingDestination {
                        state: state.clone(),
                        event: event.clone(),
                        destination: destination.clone(),
                    })
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl FromIterator<(String, StateDef)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (String, StateDef)>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
