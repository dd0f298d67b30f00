use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use stockbook_core::{DomainError, DomainResult, ItemName};

use crate::log::LogEntry;

/// Threshold used by low-stock listings when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Inventory store: item name -> quantity.
///
/// Balance rules:
/// - `add` never validates the sign, so a quantity may go (and stay) negative.
/// - `remove` deletes an item as soon as its balance drops to zero or below.
///
/// Items iterate in name order. Serializes as a bare JSON object, e.g.
/// `{"apple": 7, "banana": -2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemName, i64>,
}

/// Outcome of [`Inventory::remove`]. The warning variants leave the inventory untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Balance decreased and is still positive.
    Decremented { item: String, remaining: i64 },
    /// Balance reached zero or below; the item was dropped.
    Depleted { item: String },
    /// Item is not tracked.
    NotFound { item: String },
    /// Quantity could not be applied (unparsable input or out of range).
    InvalidQuantity { item: String },
}

impl Removal {
    /// Invalid-quantity outcome for input rejected before it reached the store.
    pub fn invalid_quantity(item: impl Into<String>) -> Self {
        let item = item.into();
        warn!(item = %item, "invalid quantity type on remove");
        Removal::InvalidQuantity { item }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Removal::NotFound { .. } | Removal::InvalidQuantity { .. })
    }
}

impl core::fmt::Display for Removal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Removal::Decremented { item, remaining } => {
                write!(f, "Removed stock of '{item}', {remaining} remaining")
            }
            Removal::Depleted { item } => write!(f, "Item '{item}' is out of stock and was removed"),
            Removal::NotFound { item } => write!(f, "Warning: Item '{item}' not found in inventory"),
            Removal::InvalidQuantity { item } => {
                write!(f, "Warning: Invalid quantity type for item '{item}'")
            }
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to `item`, creating it at zero first if needed.
    ///
    /// An empty item name is a no-op and returns `Ok(None)`. On success the
    /// new balance is returned and, when a log is supplied, an entry is
    /// appended to it. Overflowing `i64` is rejected and changes nothing.
    pub fn add(
        &mut self,
        item: &str,
        quantity: i64,
        log: Option<&mut Vec<LogEntry>>,
    ) -> DomainResult<Option<i64>> {
        if item.is_empty() {
            return Ok(None);
        }
        let name = ItemName::new(item)?;

        let current = self.get(item).unwrap_or(0);
        let updated = current.checked_add(quantity).ok_or_else(|| {
            DomainError::invalid_quantity(format!(
                "adding {quantity} to {current} overflows for item '{item}'"
            ))
        })?;

        self.items.insert(name.clone(), updated);
        debug!(item, quantity, updated, "stock added");

        if let Some(log) = log {
            log.push(LogEntry::new(name, quantity));
        }
        Ok(Some(updated))
    }

    /// Take `quantity` away from `item`.
    ///
    /// Never fails: a missing item or an out-of-range quantity is reported as
    /// a warning outcome and leaves the inventory unchanged.
    pub fn remove(&mut self, item: &str, quantity: i64) -> Removal {
        let Some(current) = self.get(item) else {
            warn!(item, "item not found in inventory");
            return Removal::NotFound { item: item.to_string() };
        };

        let Some(remaining) = current.checked_sub(quantity) else {
            return Removal::invalid_quantity(item);
        };

        if remaining <= 0 {
            self.items.remove(item);
            debug!(item, quantity, "stock depleted, item dropped");
            return Removal::Depleted { item: item.to_string() };
        }

        if let Some(balance) = self.items.get_mut(item) {
            *balance = remaining;
        }
        debug!(item, quantity, remaining, "stock removed");
        Removal::Decremented {
            item: item.to_string(),
            remaining,
        }
    }

    /// Current balance of `item`; absent items are a lookup error.
    pub fn quantity(&self, item: &str) -> DomainResult<i64> {
        self.get(item).ok_or_else(|| DomainError::not_found(item))
    }

    pub fn get(&self, item: &str) -> Option<i64> {
        self.items.get(item).copied()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Items whose balance is strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Write the `Items Report` listing, one `<item> -> <quantity>` line per item.
    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "Items Report")?;
        for (name, qty) in self.iter() {
            writeln!(out, "{name} -> {qty}")?;
        }
        Ok(())
    }

    pub fn print_report(&self) -> io::Result<()> {
        self.write_report(io::stdout().lock())
    }
}

impl FromIterator<(ItemName, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
