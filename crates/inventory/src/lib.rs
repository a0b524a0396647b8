//! Inventory ledger: the quantity/threshold table keyed by item identity.
//!
//! Pure deterministic domain logic (no IO, no storage). All stock mutation
//! and low-stock detection lives here; the warehouse orchestrator is the
//! only intended writer.

pub mod ledger;

pub use ledger::{Inventory, StockEntry};
