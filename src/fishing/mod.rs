//! Fishing system: rarity sampling, loot catalog, and loot rolls.

pub mod catalog;
pub mod distribution;
pub mod roll;
pub mod types;

pub use catalog::*;
pub use distribution::*;
pub use roll::*;
pub use types::*;
