//! JSON persistence helpers for the ~/.angler/ data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::core::constants::{DATA_DIR_NAME, LOCK_EXTENSION};
use crate::error::StorageError;

/// Get the ~/.angler/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(DATA_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a data file in ~/.angler/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Read a JSON file. `Ok(None)` if the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Serialize with the given indent.
pub fn to_json_with_indent<T: Serialize>(data: &T, indent: &[u8]) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    data.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write JSON through a synced temp file in the same directory, then rename
/// it over `path`, so readers never see a partial document. Parent
/// directories are created as needed.
pub fn write_json_atomic<T: Serialize>(
    path: &Path,
    data: &T,
    indent: &[u8],
) -> Result<(), StorageError> {
    let json = to_json_with_indent(data, indent)?;
    let dir = parent_dir(path);
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(&json)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Path of the advisory lock file that guards `path`.
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(LOCK_EXTENSION);
    path.with_file_name(name)
}

/// Opens (creating if needed) the lock file next to `path`.
///
/// The lock lives in its own file because the data file is replaced by
/// rename on every write.
pub fn open_lock_file(path: &Path) -> io::Result<File> {
    fs::create_dir_all(parent_dir(path))?;
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path_for(path))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
