use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Track item quantities in a JSON inventory file.
#[derive(Debug, Parser)]
#[command(name = "stockbook", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Inventory file (default: $STOCKBOOK_DATA_FILE or inventory.json)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add stock to an item (negative quantities are accepted)
    Add {
        item: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Remove stock; the item is dropped once its balance reaches zero
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Print the quantity of one item
    Get { item: String },

    /// List items whose quantity is below the threshold
    Low {
        /// Threshold (default: $STOCKBOOK_LOW_STOCK_THRESHOLD or 5)
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: Option<i64>,
    },

    /// Print every item and its quantity
    Report,

    /// Run the demonstration sequence against the inventory file
    Demo,
}
