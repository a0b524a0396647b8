use serde::{Deserialize, Serialize};
use tracing::warn;

use stockyard_catalog::Item;
use stockyard_core::{DomainError, DomainResult, IdSequence, OrderId};
use stockyard_inventory::{Inventory, StockEntry};
use stockyard_orders::{Counterparty, Order, OrderStatus, OrderSummary};
use stockyard_parties::{Customer, Party, Supplier};

/// The orchestrator: owns exactly one inventory ledger and the full order
/// history, and is the only writer of either.
///
/// Customers and suppliers are referenced, never owned. Every transaction
/// verb is a synchronous check-then-act sequence over `&mut self`, so the
/// ledger, the order list and the order-id sequence mutate under a single
/// ownership; if this were ever made concurrent, one mutex around the whole
/// warehouse keeps the verbs atomic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    name: String,
    inventory: Inventory,
    orders: Vec<Order>,
    order_ids: IdSequence,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: Inventory::new(),
            orders: Vec::new(),
            order_ids: IdSequence::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the ledger.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The append-only order history, in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Full ledger snapshot: `(item, quantity, threshold)`.
    pub fn view_inventory(&self) -> Vec<(Item, u32, u32)> {
        self.inventory.full_item_info()
    }

    /// Flat order rows for finance and the presentation layer.
    pub fn summarise_orders(&self) -> Vec<OrderSummary> {
        self.orders.iter().map(Order::summarise).collect()
    }

    /// Receive stock directly into the ledger (initial stocking, manual
    /// corrections). Thin passthrough so callers never touch the ledger.
    pub fn add_stock(
        &mut self,
        item: &Item,
        quantity: u32,
        threshold: Option<u32>,
    ) -> DomainResult<()> {
        self.inventory.add_stock(item, quantity, threshold)
    }

    pub fn update_price(&mut self, name: &str, new_price: u64) -> DomainResult<()> {
        self.inventory.update_price(name, new_price)
    }

    pub fn set_threshold(&mut self, name: &str, threshold: u32) -> DomainResult<()> {
        self.inventory.set_threshold(name, threshold)
    }

    /// Customer purchase: outbound sales are satisfied immediately from
    /// on-hand stock, so the record is created `Delivered`.
    ///
    /// Atomic: on any failure no ledger mutation happens and no record is
    /// created.
    pub fn place_order(
        &mut self,
        customer: &mut Customer,
        item: &Item,
        quantity: u32,
    ) -> DomainResult<Order> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let available = self.inventory.check_stock(item);
        if available < quantity {
            return Err(DomainError::insufficient_stock(quantity, available));
        }

        // Build the record before touching the ledger: an overflowing total
        // must leave no trace anywhere.
        let order = Order::new(
            self.order_ids.next_order_id(),
            item.clone(),
            quantity,
            Counterparty::customer(customer.id(), customer.name()),
            Counterparty::warehouse(self.name.clone()),
            OrderStatus::Delivered,
        )?;
        self.inventory.remove_stock(item, quantity)?;
        self.orders.push(order.clone());
        customer.add_order(order.clone());
        Ok(order)
    }

    /// Supplier replenishment: inbound stock is not trusted until physically
    /// confirmed, so this creates a `Pending` record and does NOT touch the
    /// ledger. Stock lands when the order is marked received.
    pub fn order_from_supplier(
        &mut self,
        supplier: &Supplier,
        item: &Item,
        quantity: u32,
    ) -> DomainResult<Order> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        if supplier.catalog().is_empty() {
            return Err(DomainError::validation(format!(
                "supplier '{}' has no items in its catalog",
                supplier.name()
            )));
        }

        let order = Order::new(
            self.order_ids.next_order_id(),
            item.clone(),
            quantity,
            Counterparty::warehouse(self.name.clone()),
            Counterparty::supplier(supplier.id(), supplier.name()),
            OrderStatus::Pending,
        )?;
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Confirm physical receipt of a supplier order: adds the ordered
    /// quantity to the ledger and moves the record to `Received`.
    ///
    /// Unknown ids and already-processed orders are no-ops with a
    /// diagnostic, not errors; calling this twice adds stock exactly once.
    pub fn mark_order_as_received(&mut self, order_id: OrderId) -> DomainResult<()> {
        let Some(idx) = self.orders.iter().position(|o| o.id() == order_id) else {
            warn!(%order_id, "mark_order_as_received: unknown order id, ignoring");
            return Ok(());
        };

        if !self.orders[idx].is_pending() {
            warn!(
                %order_id,
                status = %self.orders[idx].status(),
                "mark_order_as_received: order already processed, ignoring"
            );
            return Ok(());
        }

        let item = self.orders[idx].item().clone();
        let quantity = self.orders[idx].quantity();
        self.inventory.add_stock(&item, quantity, None)?;
        self.orders[idx].mark_received();
        Ok(())
    }

    /// Every order not yet received, in creation order. Delivered customer
    /// sales are included: "pending" here means "not confirmed inbound".
    pub fn list_pending_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.status() != OrderStatus::Received)
            .collect()
    }

    /// Items currently purchasable: ledger quantity above threshold AND at
    /// least one received order on record for the item.
    ///
    /// Per-item evaluation faults are logged and the item skipped so one
    /// malformed entry cannot fail the whole query.
    pub fn available_items(&self) -> Vec<(Item, u32)> {
        let mut available = Vec::new();
        for entry in self.inventory.entries() {
            match self.evaluate_availability(entry) {
                Ok(Some(quantity)) => available.push((entry.item().clone(), quantity)),
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        item = entry.item().name(),
                        error = %err,
                        "skipping item while computing availability"
                    );
                }
            }
        }
        available
    }

    fn evaluate_availability(&self, entry: &StockEntry) -> DomainResult<Option<u32>> {
        if entry.quantity() <= entry.threshold() {
            return Ok(None);
        }
        let has_received_order = self
            .orders
            .iter()
            .any(|order| {
                order.status() == OrderStatus::Received
                    && order.item().same_identity(entry.item())
            });
        Ok(has_received_order.then_some(entry.quantity()))
    }

}
