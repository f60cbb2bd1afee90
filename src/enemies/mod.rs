//! Enemy and flavor-text generation.

pub mod flavor;
pub mod generation;

pub use flavor::*;
pub use generation::*;
