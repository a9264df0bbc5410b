//! Angler - loot resolution and player progression for a fishing game.
//!
//! A catch samples a rarity, picks a catalog template, rolls its money,
//! experience, and weight, and credits the player in a shared, file-backed
//! ledger. Chat or command front-ends call [`Angler`] and format its results.

pub mod build_info;
pub mod core;
pub mod error;
pub mod fishing;
pub mod ledger;
pub mod progression;
pub mod session;
pub mod simulator;
pub mod utils;

pub use error::{AnglerError, AnglerResult, StorageError};
pub use fishing::{LootTemplate, Rarity, RolledLoot};
pub use ledger::{LedgerField, PlayerLedger, PlayerRecord};
pub use progression::{rank_for, Rank};
pub use session::{Angler, CatchResult};
