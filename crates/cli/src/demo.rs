//! Fixed demonstration sequence exercising every inventory operation.

use std::io::Write;

use stockbook_core::parse_quantity;
use stockbook_infra::SnapshotStore;
use stockbook_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory};

use crate::commands::format_items;

/// Run the demo against `store`, printing to `out`.
///
/// Sequence: add apple 10 and banana -2, try an add with a numeric name and
/// a non-numeric quantity, remove 3 apples, remove a missing orange, show the
/// apple balance and low-stock items, then save, reload and print the report.
/// Returns the reloaded inventory.
pub fn run<S, W>(store: &S, out: &mut W) -> anyhow::Result<Inventory>
where
    S: SnapshotStore,
    W: Write,
{
    let mut inventory = Inventory::new();
    inventory.add("apple", 10, None)?;
    inventory.add("banana", -2, None)?;

    match parse_quantity("ten") {
        Ok(quantity) => {
            inventory.add("123", quantity, None)?;
        }
        Err(err) => writeln!(out, "Rejected add of '123': {err}")?,
    }

    let outcome = inventory.remove("apple", 3);
    if outcome.is_warning() {
        writeln!(out, "{outcome}")?;
    }
    let outcome = inventory.remove("orange", 1);
    if outcome.is_warning() {
        writeln!(out, "{outcome}")?;
    }

    writeln!(out, "Apple stock: {}", inventory.quantity("apple")?)?;
    writeln!(
        out,
        "Low items: {}",
        format_items(&inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD))
    )?;

    store.save(&inventory)?;
    let inventory = store.load()?;
    inventory.write_report(&mut *out)?;

    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockbook_infra::InMemorySnapshotStore;

    #[test]
    fn demo_prints_expected_sequence() {
        let store = InMemorySnapshotStore::new();
        let mut out = Vec::new();

        let reloaded = run(&store, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Rejected add of '123': invalid quantity"));
        assert_eq!(
            &lines[1..],
            &[
                "Warning: Item 'orange' not found in inventory",
                "Apple stock: 7",
                "Low items: [banana]",
                "Items Report",
                "apple -> 7",
                "banana -> -2",
            ]
        );

        assert_eq!(reloaded.len(), 2);
        assert!(!reloaded.contains("123"));
        assert_eq!(store.contents().as_deref(), Some(r#"{"apple":7,"banana":-2}"#));
    }
}
