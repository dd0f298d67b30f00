use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or writing a persisted inventory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("no inventory snapshot has been saved")]
    Empty,
}
