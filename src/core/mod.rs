//! Shared constants, configuration and error types.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{EngineConfig, ProgressionRules, Ruleset};
pub use constants::*;
pub use error::*;
