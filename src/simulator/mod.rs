//! Monte Carlo drop-rate simulator.
//!
//! Draws many catches through the same distribution, catalog, and roll table
//! the engine uses, and compares observed rarity frequencies to the declared
//! weights. The ledger is never touched.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RarityStats, SimReport};
pub use runner::run_simulation;
