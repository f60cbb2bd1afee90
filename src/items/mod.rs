//! Weapons: types, catalog, and boss drops.

pub mod catalog;
pub mod drops;
pub mod types;

pub use catalog::*;
pub use drops::*;
pub use types::*;
