//! Whole-inventory snapshots: save everything, load everything.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::info;

use stockbook_inventory::Inventory;

use crate::error::PersistenceError;

/// File used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory.json";

/// Storage for a complete inventory snapshot.
///
/// `load` returns a fresh inventory meant to replace the caller's one
/// wholesale; nothing is merged.
pub trait SnapshotStore {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError>;
    fn load(&self) -> Result<Inventory, PersistenceError>;
}

/// Snapshot kept in a JSON file as a single object of `item -> quantity`.
///
/// Writes overwrite the file in place; a crash mid-write can leave it truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the file, or start empty when it does not exist yet.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<Inventory, PersistenceError> {
        if !self.exists() {
            info!(path = %self.path.display(), "inventory file missing, starting empty");
            return Ok(Inventory::new());
        }
        self.load()
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(inventory).map_err(PersistenceError::Encode)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }

    fn load(&self) -> Result<Inventory, PersistenceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let inventory: Inventory =
            serde_json::from_str(&raw).map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), items = inventory.len(), "inventory loaded");
        Ok(inventory)
    }
}

/// In-memory snapshot store for tests/dev. Holds the encoded JSON, so a
/// round trip exercises the same serialization as the file store.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last saved JSON, if any.
    pub fn contents(&self) -> Option<String> {
        self.inner.read().ok()?.clone()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, inventory: &Inventory) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(inventory).map_err(PersistenceError::Encode)?;
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(json);
        }
        Ok(())
    }

    fn load(&self) -> Result<Inventory, PersistenceError> {
        let json = self.contents().ok_or(PersistenceError::Empty)?;
        serde_json::from_str(&json).map_err(|source| PersistenceError::Malformed {
            path: PathBuf::from(":memory:"),
            source,
        })
    }
}
