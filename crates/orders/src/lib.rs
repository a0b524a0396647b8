//! Order records: immutable transaction snapshots with a forward-only status.

pub mod order;

pub use order::{Counterparty, Order, OrderStatus, OrderSummary};
