//! Abilities: the static catalog and fusion.

pub mod catalog;
pub mod fusion;
pub mod types;

pub use catalog::*;
pub use fusion::*;
pub use types::Ability;
