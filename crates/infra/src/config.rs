//! Configuration loading and representation.

use std::path::PathBuf;

use stockbook_core::parse_quantity;
use stockbook_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::snapshot::DEFAULT_DATA_FILE;

/// Environment variable naming the inventory JSON file.
pub const DATA_FILE_ENV: &str = "STOCKBOOK_DATA_FILE";

/// Environment variable holding the default low-stock threshold.
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKBOOK_LOW_STOCK_THRESHOLD";

/// Runtime settings for the inventory tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub data_file: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys use defaults; an
    /// unparsable threshold is logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match parse_quantity(&raw) {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => tracing::warn!(
                    "{LOW_STOCK_THRESHOLD_ENV} ignored ({err}); using {}",
                    config.low_stock_threshold
                ),
            }
        }

        config
    }
}
