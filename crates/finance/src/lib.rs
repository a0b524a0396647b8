//! Finance reporting: revenue/cost/profit aggregation and order export.
//!
//! A pure consumer of the warehouse's order history; nothing here mutates
//! the transaction core.

pub mod report;

pub use report::{
    FinanceReport, export_orders_to_csv, export_orders_to_json, render_orders_table,
    write_orders_csv,
};
