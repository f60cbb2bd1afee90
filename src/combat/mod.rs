//! Turn-based combat: elements, damage, the session state machine and online duels.

pub mod damage;
pub mod effects;
pub mod element;
pub mod engine;
pub mod events;
pub mod online;
pub mod types;

pub use damage::*;
pub use element::Element;
pub use engine::{ActionResult, CombatSession};
pub use events::*;
pub use online::{DuelState, OnlineDuel};
pub use types::*;
