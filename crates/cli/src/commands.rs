//! Execution of parsed subcommands against the configured inventory file.

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use stockbook_core::{ItemName, parse_quantity};
use stockbook_infra::{InventoryConfig, JsonFileStore, SnapshotStore};
use stockbook_inventory::Removal;

use crate::cli::{Cli, Command};
use crate::demo;

/// Run one command, writing user-facing output to `out`.
///
/// Mutating commands start from an empty inventory when the file does not
/// exist yet and save the result back. Read-only commands never write.
pub fn run<W: Write>(cli: Cli, config: &InventoryConfig, out: &mut W) -> anyhow::Result<()> {
    let path = cli.file.unwrap_or_else(|| config.data_file.clone());
    let store = JsonFileStore::new(path);
    debug!(path = %store.path().display(), command = ?cli.command, "running command");

    match cli.command {
        Command::Add { item, quantity } => {
            let quantity =
                parse_quantity(&quantity).with_context(|| format!("cannot add to '{item}'"))?;
            let mut inventory = store.load_or_default()?;
            let mut log = Vec::new();

            match inventory.add(&item, quantity, Some(&mut log))? {
                Some(_) => {
                    for entry in &log {
                        writeln!(out, "{entry}")?;
                    }
                    store.save(&inventory)?;
                }
                None => writeln!(out, "Nothing added: item name is empty")?,
            }
        }
        Command::Remove { item, quantity } => {
            let mut inventory = store.load_or_default()?;
            let outcome = match parse_quantity(&quantity) {
                Ok(quantity) => inventory.remove(&item, quantity),
                Err(_) => Removal::invalid_quantity(item.as_str()),
            };

            writeln!(out, "{outcome}")?;
            if !outcome.is_warning() {
                store.save(&inventory)?;
            }
        }
        Command::Get { item } => {
            let inventory = store.load_or_default()?;
            let quantity = inventory.quantity(&item)?;
            writeln!(out, "{item}: {quantity}")?;
        }
        Command::Low { threshold } => {
            let inventory = store.load_or_default()?;
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            let low = inventory.low_stock(threshold);
            writeln!(out, "Low items: {}", format_items(&low))?;
        }
        Command::Report => {
            let inventory = store.load_or_default()?;
            inventory.write_report(&mut *out)?;
        }
        Command::Demo => {
            demo::run(&store, out)?;
        }
    }

    Ok(())
}

/// Render item names as `[a, b, c]`.
pub fn format_items(items: &[ItemName]) -> String {
    let names: Vec<&str> = items.iter().map(ItemName::as_str).collect();
    format!("[{}]", names.join(", "))
}
