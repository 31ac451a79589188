//! Inventory domain module.
//!
//! This crate holds the jewelry inventory record and the rules for accepting a
//! dataset, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). Callers read the bytes; this crate decides whether they form a
//! valid inventory.

pub mod dataset;
pub mod item;

pub use dataset::{parse_inventory, validate_records};
pub use item::{InventoryItem, ItemRecord, LifecycleStage};
