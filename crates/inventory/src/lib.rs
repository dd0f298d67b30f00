//! Inventory domain module.
//!
//! This crate contains the inventory store and its rules, implemented as
//! plain in-memory logic (no file IO). Persistence lives in `stockbook-infra`.

pub mod log;
pub mod store;

pub use log::LogEntry;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Removal};
