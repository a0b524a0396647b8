//! Item registry: the purchasable-good value type and its ledger key.

pub mod item;

pub use item::{Item, ItemKey, SupplierRef};
