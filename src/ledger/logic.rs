//! Serialized read-modify-write access to the player ledger.
//!
//! Every operation takes the in-process ledger lock and then the store's
//! cross-process lock, reads the full document, and (for mutations) writes
//! the full document back before releasing both. A mutation that fails part
//! way writes nothing.

use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{info, warn};

use super::store::{JsonFileStore, LedgerStore};
use super::types::{LedgerDocument, LedgerField, PlayerRecord};
use crate::error::{AnglerError, AnglerResult};

/// Durable mapping of player id to progress.
pub struct PlayerLedger<S: LedgerStore = JsonFileStore> {
    store: Mutex<S>,
}

impl PlayerLedger<JsonFileStore> {
    /// Ledger backed by a JSON file. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::new(path))
    }
}

impl<S: LedgerStore> PlayerLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&LedgerDocument) -> T) -> AnglerResult<T> {
        let store = self.store.lock();
        let _guard = store.lock_shared()?;
        let document = store.load_document().map_err(|e| {
            warn!(error = %e, "ledger read failed");
            e
        })?;
        Ok(f(&document))
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut LedgerDocument) -> AnglerResult<T>,
    ) -> AnglerResult<T> {
        let mut store = self.store.lock();
        let _guard = store.lock_exclusive()?;
        store.ensure_exists()?;
        let mut document = store.load_document()?;
        let out = f(&mut document)?;
        store.save_document(&document).map_err(|e| {
            warn!(error = %e, "ledger write failed");
            e
        })?;
        Ok(out)
    }

    /// The player's record, or a zeroed one if they have never been saved.
    pub fn load(&self, player_id: u64) -> AnglerResult<PlayerRecord> {
        self.read(|doc| {
            doc.get(player_id)
                .map(PlayerRecord::from)
                .unwrap_or_else(|| PlayerRecord::zeroed(player_id))
        })
    }

    /// Inserts or replaces the record with the same player id.
    pub fn upsert(&self, record: &PlayerRecord) -> AnglerResult<()> {
        self.mutate(|doc| {
            doc.upsert(record);
            Ok(())
        })
    }

    /// Applies `f` to the player's record (zeroed if absent) and saves it, all
    /// under one lock so concurrent updates cannot be lost.
    pub fn update(
        &self,
        player_id: u64,
        f: impl FnOnce(&mut PlayerRecord),
    ) -> AnglerResult<PlayerRecord> {
        self.mutate(|doc| {
            let mut record = doc
                .get(player_id)
                .map(PlayerRecord::from)
                .unwrap_or_else(|| PlayerRecord::zeroed(player_id));
            f(&mut record);
            doc.upsert(&record);
            Ok(record)
        })
    }

    /// Zeroes one field of an existing player.
    pub fn reset_field(&self, player_id: u64, field: LedgerField) -> AnglerResult<PlayerRecord> {
        let record = self.mutate(|doc| {
            let mut record = doc
                .get(player_id)
                .map(PlayerRecord::from)
                .ok_or(AnglerError::PlayerNotFound(player_id))?;
            record.reset(field);
            doc.upsert(&record);
            Ok(record)
        })?;
        info!(player_id, %field, "reset player field");
        Ok(record)
    }

    /// [`PlayerLedger::reset_field`] with the field given by name.
    pub fn reset_field_named(&self, player_id: u64, field: &str) -> AnglerResult<PlayerRecord> {
        self.reset_field(player_id, field.parse()?)
    }

    pub fn delete_one(&self, player_id: u64) -> AnglerResult<()> {
        self.mutate(|doc| {
            if doc.remove(player_id) {
                Ok(())
            } else {
                Err(AnglerError::PlayerNotFound(player_id))
            }
        })?;
        info!(player_id, "deleted player");
        Ok(())
    }

    /// Removes every player. Succeeds on an already empty ledger.
    pub fn delete_all(&self) -> AnglerResult<()> {
        let removed = self.mutate(|doc| {
            let count = doc.stats.len();
            doc.clear();
            Ok(count)
        })?;
        info!(removed, "deleted all players");
        Ok(())
    }

    /// `(player_id, value)` pairs sorted by `field`, highest first.
    pub fn ranked_by(&self, field: LedgerField) -> AnglerResult<Vec<(u64, u64)>> {
        self.read(|doc| doc.ranked_by(field))
    }

    pub fn ranked_by_named(&self, field: &str) -> AnglerResult<Vec<(u64, u64)>> {
        self.ranked_by(field.parse()?)
    }

    /// All records in document order.
    pub fn players(&self) -> AnglerResult<Vec<PlayerRecord>> {
        self.read(|doc| doc.records().collect())
    }

    pub fn len(&self) -> AnglerResult<usize> {
        self.read(|doc| doc.stats.len())
    }

    pub fn is_empty(&self) -> AnglerResult<bool> {
        Ok(self.len()? == 0)
    }
}
