use serde::{Deserialize, Serialize};

use stockyard_core::{DomainError, DomainResult, SupplierId, money};

/// Opaque reference to the supplier an item came from.
///
/// Association, not ownership: the registry never reaches back into the
/// supplier, it only carries the name/id for display and bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: SupplierId,
    pub name: String,
}

/// Ledger key for an item: `(name, description)` and nothing else.
///
/// `Item` deliberately does not implement `Eq`/`Hash`; two items with the
/// same key are the same ledger entry even when their prices differ, so map
/// lookups go through this explicit key extraction instead of structural
/// equality on all fields.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub description: String,
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// A purchasable good.
///
/// Identity is `(name, description)`; `price` and `supplier` are mutable
/// value fields. Price is in minor currency units (pence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    name: String,
    description: String,
    price: u64,
    supplier: Option<SupplierRef>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        supplier: Option<SupplierRef>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if price == 0 {
            return Err(DomainError::validation("item price must be positive"));
        }
        Ok(Self {
            name,
            description: description.into(),
            price,
            supplier,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn supplier(&self) -> Option<&SupplierRef> {
        self.supplier.as_ref()
    }

    /// Explicit key extraction used for every ledger lookup.
    pub fn key(&self) -> ItemKey {
        ItemKey {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Whether `other` denotes the same ledger entry as `self`.
    pub fn same_identity(&self, other: &Item) -> bool {
        self.name == other.name && self.description == other.description
    }

    /// Mutate the price in place. The ledger's stored clone is the
    /// authoritative holder of this field.
    pub fn set_price(&mut self, price: u64) -> DomainResult<()> {
        if price == 0 {
            return Err(DomainError::validation("item price must be positive"));
        }
        self.price = price;
        Ok(())
    }

    pub fn set_supplier(&mut self, supplier: Option<SupplierRef>) {
        self.supplier = supplier;
    }

    /// One-line human-readable description.
    pub fn details(&self) -> String {
        let supplier = self
            .supplier
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("none");
        format!(
            "{}: {} - {} (Supplier: {})",
            self.name,
            self.description,
            money::format(self.price),
            supplier
        )
    }
}
