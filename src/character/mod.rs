//! Character classes, the player record, progression and persistence.

pub mod classes;
pub mod evolution;
pub mod player;
pub mod prestige;
pub mod progression;
pub mod save;

pub use classes::*;
pub use evolution::*;
pub use player::*;
pub use prestige::*;
pub use progression::*;
pub use save::*;
