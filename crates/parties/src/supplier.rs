use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockyard_catalog::{Item, ItemKey, SupplierRef};
use stockyard_core::{DomainError, DomainResult, IdSequence, SupplierId};

use crate::party::{Party, PartyRole, validate_email};

/// A supplier identity record with the catalog of items it can supply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    email: String,
    catalog: Vec<Item>,
}

impl Supplier {
    fn new(id: SupplierId, name: String, email: String) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_email(&email)?;
        Ok(Self {
            id,
            name,
            email,
            catalog: Vec::new(),
        })
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }

    pub fn catalog(&self) -> &[Item] {
        &self.catalog
    }

    /// Opaque reference for tagging items and order counterparties.
    pub fn supplier_ref(&self) -> SupplierRef {
        SupplierRef {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn add_item(&mut self, item: Item) {
        self.catalog.push(item);
    }

    /// Remove a catalog item by identity key.
    pub fn remove_item(&mut self, key: &ItemKey) -> DomainResult<()> {
        let before = self.catalog.len();
        self.catalog.retain(|item| item.key() != *key);
        if self.catalog.len() == before {
            return Err(DomainError::not_found(format!("item '{}'", key.name)));
        }
        Ok(())
    }

    pub fn update_profile(
        &mut self,
        name: Option<String>,
        email: Option<String>,
    ) -> DomainResult<()> {
        if let Some(name) = name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(email) = email {
            validate_email(&email)?;
            self.email = email;
        }
        Ok(())
    }
}

impl Party for Supplier {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn role(&self) -> PartyRole {
        PartyRole::Supplier
    }
}

/// Owns all supplier records and the id sequence that names them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierManager {
    suppliers: BTreeMap<SupplierId, Supplier>,
    ids: IdSequence,
}

impl SupplierManager {
    pub fn new() -> Self {
        Self {
            suppliers: BTreeMap::new(),
            ids: IdSequence::new(),
        }
    }

    pub fn create_supplier(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<&Supplier> {
        let id = self.ids.next_supplier_id()?;
        let supplier = Supplier::new(id, name.into(), email.into())?;
        self.suppliers.insert(id, supplier);
        Ok(&self.suppliers[&id])
    }

    pub fn get(&self, id: SupplierId) -> DomainResult<&Supplier> {
        self.suppliers
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("supplier '{id}'")))
    }

    pub fn get_mut(&mut self, id: SupplierId) -> DomainResult<&mut Supplier> {
        self.suppliers
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("supplier '{id}'")))
    }

    pub fn all(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Create a new item in a supplier's catalog.
    ///
    /// Rejects a duplicate `(name, description)` within that supplier; the
    /// new item carries a back-reference to the supplier.
    pub fn create_supplier_item(
        &mut self,
        supplier_id: SupplierId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
    ) -> DomainResult<Item> {
        let supplier = self
            .suppliers
            .get_mut(&supplier_id)
            .ok_or_else(|| DomainError::not_found(format!("supplier '{supplier_id}'")))?;

        let supplier_ref = SupplierRef {
            id: supplier.id,
            name: supplier.name.clone(),
        };
        let item = Item::new(name, description, price, Some(supplier_ref))?;

        if supplier.catalog.iter().any(|existing| existing.key() == item.key()) {
            return Err(DomainError::validation(format!(
                "item '{}' with description '{}' already exists",
                item.name(),
                item.description()
            )));
        }

        supplier.catalog.push(item.clone());
        Ok(item)
    }

    pub fn supplier_items(&self, supplier_id: SupplierId) -> DomainResult<&[Item]> {
        Ok(self.get(supplier_id)?.catalog())
    }

    pub fn remove_item_from_supplier(
        &mut self,
        supplier_id: SupplierId,
        key: &ItemKey,
    ) -> DomainResult<()> {
        self.get_mut(supplier_id)?.remove_item(key)
    }
}
