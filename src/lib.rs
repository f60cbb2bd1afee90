//! Elemental Odyssey - turn-based elemental RPG combat engine.
//!
//! The engine is headless: combat transitions return events and animation cues, and
//! rendering, audio and input live with the caller.

pub mod abilities;
pub mod character;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod minigame;
pub mod pvp;
pub mod rewards;
pub mod town;
