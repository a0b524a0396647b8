use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockyard_core::{CustomerId, DomainError, DomainResult, IdSequence};
use stockyard_orders::Order;

use crate::party::{Party, PartyRole, validate_email};

/// A customer identity record with its personal order history.
///
/// The history is append-only and only ever fed by the warehouse's
/// transaction verbs; customer sales are terminal (`delivered`), so the
/// cloned records never go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    order_history: Vec<Order>,
}

impl Customer {
    fn new(id: CustomerId, name: String, email: String) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_email(&email)?;
        Ok(Self {
            id,
            name,
            email,
            order_history: Vec::new(),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }

    /// Append an order to this customer's history.
    pub fn add_order(&mut self, order: Order) {
        self.order_history.push(order);
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

impl Party for Customer {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn role(&self) -> PartyRole {
        PartyRole::Customer
    }
}

/// Owns all customer records and the id sequence that names them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerManager {
    customers: BTreeMap<CustomerId, Customer>,
    ids: IdSequence,
}

impl CustomerManager {
    pub fn new() -> Self {
        Self {
            customers: BTreeMap::new(),
            ids: IdSequence::new(),
        }
    }

    /// Create and store a new customer, assigning the next id.
    pub fn create_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<&Customer> {
        let id = self.ids.next_customer_id()?;
        let customer = Customer::new(id, name.into(), email.into())?;
        self.customers.insert(id, customer);
        Ok(&self.customers[&id])
    }

    pub fn get(&self, id: CustomerId) -> DomainResult<&Customer> {
        self.customers
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("customer '{id}'")))
    }

    pub fn get_mut(&mut self, id: CustomerId) -> DomainResult<&mut Customer> {
        self.customers
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("customer '{id}'")))
    }

    pub fn delete_customer(&mut self, id: CustomerId) -> DomainResult<()> {
        self.customers
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("customer '{id}'")))
    }

    pub fn all(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_customer_assigns_sequential_ids() {
        let mut manager = CustomerManager::new();
        let a = manager
            .create_customer("Alice", "alice@example.com")
            .unwrap()
            .id();
        let b = manager
            .create_customer("Bob", "bob@example.com")
            .unwrap()
            .id();
        assert_eq!(a.to_string(), "cu_1");
        assert_eq!(b.to_string(), "cu_2");
    }

    #[test]
    fn create_customer_rejects_bad_email() {
        let mut manager = CustomerManager::new();
        assert!(matches!(
            manager.create_customer("Alice", "no-at-sign"),
            Err(DomainError::Validation(_))
        ));
        assert!(manager.is_empty());
    }

    #[test]
    fn get_unknown_customer_is_not_found() {
        let manager = CustomerManager::new();
        assert!(matches!(
            manager.get(CustomerId::from_raw(99)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn delete_customer_removes_the_record() {
        let mut manager = CustomerManager::new();
        let id = manager
            .create_customer("Alice", "alice@example.com")
            .unwrap()
            .id();
        manager.delete_customer(id).unwrap();
        assert!(manager.get(id).is_err());
        assert!(matches!(
            manager.delete_customer(id),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn update_profile_changes_only_supplied_fields() {
        let mut manager = CustomerManager::new();
        let id = manager
            .create_customer("Alice", "alice@example.com")
            .unwrap()
            .id();
        let customer = manager.get_mut(id).unwrap();
        customer
            .update_profile(Some("Alicia".into()), None)
            .unwrap();
        assert_eq!(customer.name(), "Alicia");
        assert_eq!(customer.email(), "alice@example.com");

        assert!(customer.update_profile(None, Some("bad".into())).is_err());
        assert_eq!(customer.email(), "alice@example.com");
    }

    #[test]
    fn role_is_customer() {
        let mut manager = CustomerManager::new();
        let customer = manager
            .create_customer("Alice", "alice@example.com")
            .unwrap();
        assert_eq!(customer.role(), PartyRole::Customer);
    }
}
