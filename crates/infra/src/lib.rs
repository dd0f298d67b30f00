//! Infrastructure layer: JSON persistence and configuration.

pub mod config;
pub mod error;
pub mod snapshot;

pub use config::InventoryConfig;
pub use error::PersistenceError;
pub use snapshot::{DEFAULT_DATA_FILE, InMemorySnapshotStore, JsonFileStore, SnapshotStore};
