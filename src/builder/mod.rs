//! Ways to assemble a machine configuration.
//!
//! A configuration can be deserialized from JSON, assembled with the fluent
//! [`FsmConfigBuilder`], or declared inline with the [`fsm_config!`](crate::fsm_config)
//! macro. All three produce the same [`FsmConfig`].

pub mod config;
pub mod error;
pub mod macros;

pub use config::{FsmConfig, FsmConfigBuilder};
pub use error::BuildError;
