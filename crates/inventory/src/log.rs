//! Caller-collected records of stock additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::ItemName;

/// Record of a single `add`, handed back to the caller instead of persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub item: ItemName,
    pub quantity: i64,
}

impl LogEntry {
    /// Entry stamped with the current time.
    pub fn new(item: ItemName, quantity: i64) -> Self {
        Self::at(Utc::now(), item, quantity)
    }

    pub fn at(at: DateTime<Utc>, item: ItemName, quantity: i64) -> Self {
        Self { at, item, quantity }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.quantity, self.item)
    }
}
