//! Machine configuration and its fluent builder.

use crate::builder::error::BuildError;
use crate::core::{StateDef, StateTable};
use crate::engine::Fsm;
use serde::{Deserialize, Serialize};

/// Everything needed to construct an [`Fsm`].
///
/// Serialized as `{ "initial": ..., "states": { name: { "transitions": { event: destination } } } }`.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::FsmConfig;
///
/// let config = FsmConfig::from_json(r#"{
///     "initial": "normal",
///     "states": {
///         "normal": { "transitions": { "study": "busy" } },
///         "busy": { "transitions": { "get_hungry": "hungry" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "normal");
/// assert_eq!(config.states.destination("normal", "study"), Some("busy"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// Name of the starting state. Not required to appear in `states`.
    pub initial: String,
    pub states: StateTable,
}

impl FsmConfig {
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BuildError::SerializationFailed(e.to_string()))
    }

    /// Construct a machine from this configuration.
    pub fn into_machine(self) -> Fsm {
        Fsm::new(self)
    }
}

/// Builder for constructing configurations with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::FsmConfigBuilder;
///
/// let mut fsm = FsmConfigBuilder::new()
///     .initial("normal")
///     .transition("normal", "study", "busy")
///     .transition("busy", "get_hungry", "hungry")
///     .state("hungry")
///     .build_machine()
///     .unwrap();
///
/// fsm.trigger("study").unwrap();
/// assert_eq!(fsm.state(), "busy");
/// ```
#[derive(Debug, Default)]
pub struct FsmConfigBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl FsmConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry_mut(name);
        self
    }

    /// Declare a state together with all of its transitions.
    pub fn state_def(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(name, def);
        self
    }

    /// Add a transition, declaring `from` if needed.
    ///
    /// `to` is not declared implicitly, so a transition into an undeclared
    /// state stays expressible.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry_mut(from)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state was never set.
    pub fn build(self) -> Result<FsmConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(FsmConfig::new(initial, self.states))
    }

    /// Build the configuration and construct a machine from it.
    pub fn build_machine(self) -> Result<Fsm, BuildError> {
        self.build().map(Fsm::new)
    }
}
