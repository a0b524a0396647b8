use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockyard_catalog::{Item, ItemKey};
use stockyard_core::{DomainError, DomainResult};

/// One ledger row: the stored item clone plus its stock counters.
///
/// The `item` here is an independent copy of whatever the caller handed to
/// [`Inventory::add_stock`]; from that point on the clone's `price` is the
/// authoritative one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockEntry {
    item: Item,
    quantity: u32,
    threshold: u32,
}

impl StockEntry {
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Quantity strictly below threshold flags the item as low.
    pub fn is_low(&self) -> bool {
        self.quantity < self.threshold
    }
}

/// The stock ledger: item identity -> (quantity, threshold).
///
/// Backed by a `BTreeMap` over [`ItemKey`] so every read-only view iterates
/// in a deterministic order. Entries are never deleted: selling out leaves
/// `(0, threshold)` behind, so thresholds survive a sell-out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    stock: BTreeMap<ItemKey, StockEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            stock: BTreeMap::new(),
        }
    }

    /// Add stock for `item`.
    ///
    /// For an existing entry the quantity is incremented (rejecting an
    /// accumulation that would overflow) and the threshold replaced only
    /// when explicitly supplied. A new entry stores a clone of `item`
    /// (decoupling the ledger from caller-held mutable references) with the
    /// given threshold, defaulting to 0.
    pub fn add_stock(
        &mut self,
        item: &Item,
        quantity: u32,
        threshold: Option<u32>,
    ) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        match self.stock.get_mut(&item.key()) {
            Some(entry) => {
                entry.quantity = entry.quantity.checked_add(quantity).ok_or_else(|| {
                    DomainError::validation(format!(
                        "stock quantity for '{}' would overflow",
                        item.name()
                    ))
                })?;
                if let Some(t) = threshold {
                    entry.threshold = t;
                }
            }
            None => {
                self.stock.insert(
                    item.key(),
                    StockEntry {
                        item: item.clone(),
                        quantity,
                        threshold: threshold.unwrap_or(0),
                    },
                );
            }
        }
        Ok(())
    }

    /// Withdraw stock for `item`. Rejects over-withdrawal outright, leaving
    /// the entry untouched; quantity can never go negative.
    pub fn remove_stock(&mut self, item: &Item, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let entry = self
            .stock
            .get_mut(&item.key())
            .ok_or_else(|| DomainError::not_found(format!("item '{}'", item.name())))?;

        if quantity > entry.quantity {
            return Err(DomainError::insufficient_stock(quantity, entry.quantity));
        }

        entry.quantity -= quantity;
        Ok(())
    }

    /// On-hand quantity; 0 for items the ledger has never seen (no error).
    pub fn check_stock(&self, item: &Item) -> u32 {
        self.stock
            .get(&item.key())
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Replace the threshold of the entry whose item has this name.
    pub fn set_threshold(&mut self, name: &str, threshold: u32) -> DomainResult<()> {
        let entry = self
            .entry_by_name_mut(name)
            .ok_or_else(|| DomainError::not_found(format!("item '{name}'")))?;
        entry.threshold = threshold;
        Ok(())
    }

    /// Mutate the price on the stored item clone whose name matches.
    pub fn update_price(&mut self, name: &str, new_price: u64) -> DomainResult<()> {
        if new_price == 0 {
            return Err(DomainError::validation("price must be positive"));
        }
        let entry = self
            .entry_by_name_mut(name)
            .ok_or_else(|| DomainError::not_found(format!("item '{name}'")))?;
        entry.item.set_price(new_price)
    }

    /// All items currently below their threshold, in key order.
    pub fn low_stock_alerts(&self) -> Vec<Item> {
        self.stock
            .values()
            .filter(|entry| entry.is_low())
            .map(|entry| entry.item.clone())
            .collect()
    }

    /// Full read-only snapshot: `(item, quantity, threshold)` in key order.
    pub fn full_item_info(&self) -> Vec<(Item, u32, u32)> {
        self.stock
            .values()
            .map(|entry| (entry.item.clone(), entry.quantity, entry.threshold))
            .collect()
    }

    /// Read-only iteration over ledger rows, in key order.
    pub fn entries(&self) -> impl Iterator<Item = &StockEntry> {
        self.stock.values()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    fn entry_by_name_mut(&mut self, name: &str) -> Option<&mut StockEntry> {
        self.stock
            .values_mut()
            .find(|entry| entry.item.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget() -> Item {
        Item::new("Widget", "A small widget", 1999, None).unwrap()
    }

    fn gadget() -> Item {
        Item::new("Gadget", "A useful gadget", 2999, None).unwrap()
    }

    #[test]
    fn add_then_check_stock() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        assert_eq!(inventory.check_stock(&widget()), 10);
        assert!(inventory.low_stock_alerts().is_empty());
    }

    #[test]
    fn add_stock_accumulates_and_keeps_threshold_unless_supplied() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        inventory.add_stock(&widget(), 5, None).unwrap();

        let info = inventory.full_item_info();
        assert_eq!(info.len(), 1);
        assert_eq!((info[0].1, info[0].2), (15, 5));

        inventory.add_stock(&widget(), 5, Some(3)).unwrap();
        let info = inventory.full_item_info();
        assert_eq!((info[0].1, info[0].2), (20, 3));
    }

    #[test]
    fn add_stock_rejects_overflowing_quantity() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), u32::MAX, None).unwrap();

        let err = inventory.add_stock(&widget(), 1, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory.check_stock(&widget()), u32::MAX);
    }

    #[test]
    fn add_stock_rejects_zero_quantity() {
        let mut inventory = Inventory::new();
        assert!(matches!(
            inventory.add_stock(&widget(), 0, None),
            Err(DomainError::Validation(_))
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn stored_item_is_a_clone_decoupled_from_the_caller() {
        let mut caller_item = widget();
        let mut inventory = Inventory::new();
        inventory.add_stock(&caller_item, 10, None).unwrap();

        // Mutating the caller's instance must not touch the ledger's copy.
        caller_item.set_price(1).ok();
        let (stored, _, _) = inventory.full_item_info().remove(0);
        assert_eq!(stored.price(), 1999);
    }

    #[test]
    fn remove_stock_decrements_in_place() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        inventory.remove_stock(&widget(), 8).unwrap();
        assert_eq!(inventory.check_stock(&widget()), 2);
    }

    #[test]
    fn remove_stock_unknown_item_is_not_found() {
        let mut inventory = Inventory::new();
        assert!(matches!(
            inventory.remove_stock(&widget(), 1),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn over_withdrawal_fails_and_leaves_quantity_unchanged() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, None).unwrap();

        let err = inventory.remove_stock(&widget(), 20).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientStock {
                requested: 20,
                available: 10
            }
        );
        assert_eq!(inventory.check_stock(&widget()), 10);
    }

    #[test]
    fn zero_quantity_entries_are_retained_with_their_threshold() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        inventory.remove_stock(&widget(), 10).unwrap();

        assert_eq!(inventory.len(), 1);
        let info = inventory.full_item_info();
        assert_eq!((info[0].1, info[0].2), (0, 5));
        assert_eq!(inventory.low_stock_alerts().len(), 1);
    }

    #[test]
    fn check_stock_returns_zero_for_absent_items() {
        let inventory = Inventory::new();
        assert_eq!(inventory.check_stock(&widget()), 0);
    }

    #[test]
    fn set_threshold_by_name() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        inventory.set_threshold("Widget", 10).unwrap();

        let info = inventory.full_item_info();
        assert_eq!(info[0].2, 10);
    }

    #[test]
    fn set_threshold_unknown_name_is_not_found() {
        let mut inventory = Inventory::new();
        let err = inventory.set_threshold("Nonexistent", 5).unwrap_err();
        assert_eq!(err, DomainError::not_found("item 'Nonexistent'"));
    }

    #[test]
    fn update_price_mutates_the_stored_clone() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, None).unwrap();
        inventory.update_price("Widget", 2499).unwrap();

        let (stored, _, _) = inventory.full_item_info().remove(0);
        assert_eq!(stored.price(), 2499);
    }

    #[test]
    fn update_price_rejects_zero_and_unknown_names() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, None).unwrap();
        assert!(matches!(
            inventory.update_price("Widget", 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            inventory.update_price("Nonexistent Item", 1999),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn low_stock_alerts_lists_items_below_threshold_in_key_order() {
        let mut inventory = Inventory::new();
        inventory.add_stock(&widget(), 10, Some(5)).unwrap();
        inventory.add_stock(&gadget(), 2, Some(5)).unwrap();

        let alerts = inventory.low_stock_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].name(), "Gadget");

        inventory.remove_stock(&widget(), 8).unwrap();
        let alerts = inventory.low_stock_alerts();
        assert_eq!(alerts.len(), 2);
        // BTreeMap key order: Gadget before Widget.
        assert_eq!(alerts[0].name(), "Gadget");
        assert_eq!(alerts[1].name(), "Widget");
    }

    #[test]
    fn empty_inventory_has_no_alerts_and_no_info() {
        let inventory = Inventory::new();
        assert!(inventory.low_stock_alerts().is_empty());
        assert!(inventory.full_item_info().is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: removing q <= added decreases check_stock by exactly q.
        #[test]
        fn remove_decreases_stock_by_exactly_q(added in 1u32..10_000, q in 1u32..10_000) {
            prop_assume!(q <= added);
            let mut inventory = Inventory::new();
            inventory.add_stock(&widget(), added, None).unwrap();
            inventory.remove_stock(&widget(), q).unwrap();
            prop_assert_eq!(inventory.check_stock(&widget()), added - q);
        }

        /// Property: any sequence of withdrawals never drives stock negative;
        /// failed withdrawals leave the quantity unchanged.
        #[test]
        fn withdrawals_never_go_negative(
            added in 1u32..1_000,
            withdrawals in prop::collection::vec(1u32..500, 1..20)
        ) {
            let mut inventory = Inventory::new();
            inventory.add_stock(&widget(), added, None).unwrap();

            let mut expected = added;
            for q in withdrawals {
                let before = inventory.check_stock(&widget());
                match inventory.remove_stock(&widget(), q) {
                    Ok(()) => expected -= q,
                    Err(DomainError::InsufficientStock { requested, available }) => {
                        prop_assert_eq!(requested, q);
                        prop_assert_eq!(available, before);
                        prop_assert_eq!(inventory.check_stock(&widget()), before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
                prop_assert_eq!(inventory.check_stock(&widget()), expected);
            }
        }
    }
}
