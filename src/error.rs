//! Error types for the catch engine and player ledger.

use std::io;

use thiserror::Error;

use crate::fishing::Rarity;

/// Failures of the backing ledger document.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed ledger document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Every failure the engine can report to its caller.
#[derive(Error, Debug)]
pub enum AnglerError {
    /// Economy tables are inconsistent. Fatal at startup.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A rarity name or rarity without roll ranges reached the loot roll.
    #[error("unknown rarity: {0}")]
    UnknownRarity(String),

    /// The catalog has nothing for the sampled rarity; the caller may retry.
    #[error("no catch available for rarity {0}")]
    NoCatchAvailable(Rarity),

    #[error("player {0} not found")]
    PlayerNotFound(u64),

    #[error("invalid field: {0:?} (expected money or experience)")]
    InvalidField(String),

    /// The ledger document could not be read or written. Nothing was applied.
    #[error("ledger storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),
}

impl AnglerError {
    /// Whether a single request failing this way leaves the engine usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AnglerError::Configuration(_))
    }
}

impl From<io::Error> for AnglerError {
    fn from(err: io::Error) -> Self {
        AnglerError::StorageUnavailable(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for AnglerError {
    fn from(err: serde_json::Error) -> Self {
        AnglerError::StorageUnavailable(StorageError::Malformed(err))
    }
}

pub type AnglerResult<T> = Result<T, AnglerError>;
