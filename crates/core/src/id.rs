//! Strongly-typed identifiers used across the domain.
//!
//! Every id is allocated by an [`IdSequence`] owned by the manager (or
//! warehouse) that creates the entity. Process-wide counters are deliberately
//! avoided: they break test isolation and concurrency.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a customer. Displays as `cu_{n}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u32);

/// Identifier of a supplier. Displays as `su_{n}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(u32);

/// Identifier of an order record. Monotonic within its owning warehouse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

macro_rules! impl_counter_newtype {
    ($t:ty, $raw:ty, $prefix:literal) => {
        impl $t {
            pub fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            pub fn as_raw(&self) -> $raw {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

impl_counter_newtype!(CustomerId, u32, "cu_");
impl_counter_newtype!(SupplierId, u32, "su_");
impl_counter_newtype!(OrderId, u64, "#");

/// Instance-owned monotonic counter, starting at 1.
///
/// Injected into the owning manager/warehouse at construction so id
/// allocation shares the owner's lifetime (and, if ever made concurrent,
/// the owner's lock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next raw id. Never repeats within this sequence.
    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Allocate the next customer id. Party ids live in a `u32` space, so
    /// a counter past `u32::MAX` is refused rather than truncated.
    pub fn next_customer_id(&mut self) -> DomainResult<CustomerId> {
        u32::try_from(self.next())
            .map(CustomerId::from_raw)
            .map_err(|_| DomainError::validation("customer id space exhausted"))
    }

    /// Allocate the next supplier id. Same `u32` space rule as customers.
    pub fn next_supplier_id(&mut self) -> DomainResult<SupplierId> {
        u32::try_from(self.next())
            .map(SupplierId::from_raw)
            .map_err(|_| DomainError::validation("supplier id space exhausted"))
    }

    pub fn next_order_id(&mut self) -> OrderId {
        OrderId::from_raw(self.next())
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic_and_starts_at_one() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
    }

    #[test]
    fn separate_sequences_are_independent() {
        let mut a = IdSequence::new();
        let mut b = IdSequence::new();
        a.next();
        a.next();
        assert_eq!(b.next(), 1);
    }

    #[test]
    fn party_id_allocation_refuses_a_counter_past_u32() {
        let mut seq = IdSequence {
            next: u64::from(u32::MAX) + 1,
        };
        assert!(matches!(
            seq.next_customer_id(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            seq.next_supplier_id(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn ids_display_with_role_prefix() {
        assert_eq!(CustomerId::from_raw(1).to_string(), "cu_1");
        assert_eq!(SupplierId::from_raw(7).to_string(), "su_7");
        assert_eq!(OrderId::from_raw(42).to_string(), "#42");
    }
}
