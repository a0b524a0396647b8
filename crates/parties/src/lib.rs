//! Identity collaborators: customers, suppliers and their managers.
//!
//! The transaction core only ever sees these as opaque name/id references;
//! nothing in here mutates the ledger.

pub mod customer;
pub mod party;
pub mod supplier;

pub use customer::{Customer, CustomerManager};
pub use party::{Party, PartyRole};
pub use supplier::{Supplier, SupplierManager};
