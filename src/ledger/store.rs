//! Whole-document storage backends for the player ledger.
//!
//! A store only loads and saves complete documents. The ledger serializes
//! threads in this process; a store's lock serializes other processes that
//! share the same backing document.

use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::info;

use super::types::LedgerDocument;
use crate::core::constants::LEDGER_INDENT;
use crate::error::StorageError;
use crate::utils::persistence::{open_lock_file, read_json, write_json_atomic};

/// A held store lock. Released when dropped.
#[derive(Debug, Default)]
pub struct StoreLock {
    file: Option<File>,
}

impl StoreLock {
    /// Guard for stores that need no cross-process lock.
    pub fn unlocked() -> Self {
        Self::default()
    }

    fn held(file: File) -> Self {
        Self { file: Some(file) }
    }

    pub fn is_held(&self) -> bool {
        self.file.is_some()
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            let _ = FileExt::unlock(file);
        }
    }
}

/// Backing storage for a [`LedgerDocument`].
pub trait LedgerStore: Send {
    /// Reads the current document. A missing document is an empty one.
    fn load_document(&self) -> Result<LedgerDocument, StorageError>;

    /// Replaces the stored document. Must be all-or-nothing.
    fn save_document(&mut self, document: &LedgerDocument) -> Result<(), StorageError>;

    /// Materializes an empty document if none exists yet.
    fn ensure_exists(&mut self) -> Result<(), StorageError> {
        Ok(())
    }

    /// Blocks until no other process holds the document, for a
    /// read-modify-write.
    fn lock_exclusive(&self) -> Result<StoreLock, StorageError> {
        Ok(StoreLock::unlocked())
    }

    /// Blocks until no other process is writing the document.
    fn lock_shared(&self) -> Result<StoreLock, StorageError> {
        Ok(StoreLock::unlocked())
    }
}

/// Ledger stored as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn lock_exclusive(&self) -> Result<StoreLock, StorageError> {
        let file = open_lock_file(&self.path)?;
        FileExt::lock_exclusive(&file)?;
        Ok(StoreLock::held(file))
    }

    fn lock_shared(&self) -> Result<StoreLock, StorageError> {
        // No directory means no document yet; nothing to wait for.
        if self.path.parent().is_some_and(|dir| !dir.as_os_str().is_empty() && !dir.exists()) {
            return Ok(StoreLock::unlocked());
        }
        let file = open_lock_file(&self.path)?;
        FileExt::lock_shared(&file)?;
        Ok(StoreLock::held(file))
    }

    fn load_document(&self) -> Result<LedgerDocument, StorageError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn save_document(&mut self, document: &LedgerDocument) -> Result<(), StorageError> {
        write_json_atomic(&self.path, document, LEDGER_INDENT)
    }

    fn ensure_exists(&mut self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        info!(path = %self.path.display(), "creating empty ledger");
        write_json_atomic(&self.path, &LedgerDocument::default(), LEDGER_INDENT)
    }
}

/// In-process store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: LedgerDocument,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: LedgerDocument) -> Self {
        Self { document }
    }
}

impl LedgerStore for MemoryStore {
    fn load_document(&self) -> Result<LedgerDocument, StorageError> {
        Ok(self.document.clone())
    }

    fn save_document(&mut self, document: &LedgerDocument) -> Result<(), StorageError> {
        self.document = document.clone();
        Ok(())
    }
}
