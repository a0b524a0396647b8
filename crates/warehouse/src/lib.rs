//! Warehouse orchestration: the two transaction verbs and their derived
//! views, on top of one inventory ledger and an append-only order history.

pub mod warehouse;

pub use warehouse::Warehouse;
