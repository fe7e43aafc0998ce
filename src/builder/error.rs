//! Errors raised while assembling a machine configuration.

use thiserror::Error;

/// Errors that can occur when building or loading an [`FsmConfig`](super::FsmConfig).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The JSON document did not describe a configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
