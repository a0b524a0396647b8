use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockyard_catalog::Item;
use stockyard_core::{CustomerId, DomainError, DomainResult, OrderId, SupplierId, money};

/// Order status lifecycle.
///
/// Transitions are forward-only: `Pending -> Received` when a supplier
/// shipment is confirmed; `Delivered` is assigned at creation for direct
/// customer sales and is terminal. There is no cancellation path in this
/// design (known limitation, not filled in silently).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Received,
    Delivered,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Received => "received",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

/// A buyer or seller on an order, captured as an opaque name/id snapshot.
///
/// Static replacement for runtime type inspection of the counterparty: the
/// kind is explicit, and finance filters on it without reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum Counterparty {
    Customer { id: CustomerId, name: String },
    Supplier { id: SupplierId, name: String },
    Warehouse { name: String },
}

impl Counterparty {
    pub fn customer(id: CustomerId, name: impl Into<String>) -> Self {
        Self::Customer {
            id,
            name: name.into(),
        }
    }

    pub fn supplier(id: SupplierId, name: impl Into<String>) -> Self {
        Self::Supplier {
            id,
            name: name.into(),
        }
    }

    pub fn warehouse(name: impl Into<String>) -> Self {
        Self::Warehouse { name: name.into() }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Counterparty::Customer { name, .. }
            | Counterparty::Supplier { name, .. }
            | Counterparty::Warehouse { name } => name,
        }
    }

    pub fn is_warehouse(&self) -> bool {
        matches!(self, Counterparty::Warehouse { .. })
    }

    pub fn is_supplier(&self) -> bool {
        matches!(self, Counterparty::Supplier { .. })
    }
}

/// Immutable snapshot of one transaction.
///
/// Everything but `status` is frozen at creation; in particular
/// `total_price` is `item.price * quantity` evaluated once, and is never
/// recomputed when the ledger price changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    item: Item,
    quantity: u32,
    buyer: Counterparty,
    seller: Counterparty,
    total_price: u64,
    timestamp: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// Build a new order record; the id comes from the warehouse-owned
    /// sequence, never from a global counter. Rejects a `price * quantity`
    /// total that would overflow.
    pub fn new(
        id: OrderId,
        item: Item,
        quantity: u32,
        buyer: Counterparty,
        seller: Counterparty,
        status: OrderStatus,
    ) -> DomainResult<Self> {
        let total_price = item
            .price()
            .checked_mul(u64::from(quantity))
            .ok_or_else(|| {
                DomainError::validation(format!("order total for '{}' would overflow", item.name()))
            })?;
        Ok(Self {
            id,
            item,
            quantity,
            buyer,
            seller,
            total_price,
            timestamp: Utc::now(),
            status,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn buyer(&self) -> &Counterparty {
        &self.buyer
    }

    pub fn seller(&self) -> &Counterparty {
        &self.seller
    }

    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    /// Forward-only transition: only a `Pending` order can become
    /// `Received`. Returns whether the transition happened.
    pub fn mark_received(&mut self) -> bool {
        if self.status == OrderStatus::Pending {
            self.status = OrderStatus::Received;
            true
        } else {
            false
        }
    }

    /// Flat serializable view for reporting and export.
    pub fn summarise(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.id,
            item_name: self.item.name().to_string(),
            item_description: self.item.description().to_string(),
            item_price: self.item.price(),
            quantity: self.quantity,
            total_price: self.total_price,
            buyer_name: self.buyer.display_name().to_string(),
            seller_name: self.seller.display_name().to_string(),
            status: self.status,
            timestamp: self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Formatted invoice text for this order.
    pub fn invoice(&self) -> String {
        format!(
            "Invoice - Order {}\n\
             Date: {}\n\
             Item: {}\n\
             Quantity: {}\n\
             Total Price: {}\n\
             Buyer: {}\n\
             Seller: {}",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.item.name(),
            self.quantity,
            money::format(self.total_price),
            self.buyer.display_name(),
            self.seller.display_name(),
        )
    }
}

/// Equality is by order id only.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

/// Read-only order row handed to finance and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub item_name: String,
    pub item_description: String,
    pub item_price: u64,
    pub quantity: u32,
    pub total_price: u64,
    pub buyer_name: String,
    pub seller_name: String,
    pub status: OrderStatus,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item::new("Widget", "A small widget", 1999, None).unwrap()
    }

    fn test_order(id: u64, status: OrderStatus) -> Order {
        Order::new(
            OrderId::from_raw(id),
            widget(),
            3,
            Counterparty::customer(CustomerId::from_raw(1), "Alice"),
            Counterparty::warehouse("Main Warehouse"),
            status,
        )
        .unwrap()
    }

    #[test]
    fn total_price_is_computed_once_at_creation() {
        let mut item = widget();
        let order = Order::new(
            OrderId::from_raw(1),
            item.clone(),
            3,
            Counterparty::customer(CustomerId::from_raw(1), "Alice"),
            Counterparty::warehouse("Main Warehouse"),
            OrderStatus::Delivered,
        )
        .unwrap();
        assert_eq!(order.total_price(), 3 * 1999);

        // A later price change must not affect the frozen total.
        item.set_price(9999).unwrap();
        assert_eq!(order.total_price(), 3 * 1999);
    }

    #[test]
    fn new_rejects_an_overflowing_total() {
        let dear = Item::new("Widget", "A small widget", u64::MAX, None).unwrap();
        let err = Order::new(
            OrderId::from_raw(1),
            dear,
            2,
            Counterparty::customer(CustomerId::from_raw(1), "Alice"),
            Counterparty::warehouse("Main Warehouse"),
            OrderStatus::Delivered,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn mark_received_only_transitions_pending_orders() {
        let mut pending = test_order(1, OrderStatus::Pending);
        assert!(pending.mark_received());
        assert_eq!(pending.status(), OrderStatus::Received);

        // Terminal: a second call is refused.
        assert!(!pending.mark_received());

        let mut delivered = test_order(2, OrderStatus::Delivered);
        assert!(!delivered.mark_received());
        assert_eq!(delivered.status(), OrderStatus::Delivered);
    }

    #[test]
    fn equality_is_by_order_id() {
        let a = test_order(7, OrderStatus::Pending);
        let mut b = test_order(7, OrderStatus::Pending);
        b.mark_received();
        assert_eq!(a, b);

        let c = test_order(8, OrderStatus::Pending);
        assert_ne!(a, c);
    }

    #[test]
    fn summary_carries_the_flat_reporting_fields() {
        let order = test_order(4, OrderStatus::Delivered);
        let summary = order.summarise();
        assert_eq!(summary.order_id, OrderId::from_raw(4));
        assert_eq!(summary.item_name, "Widget");
        assert_eq!(summary.item_description, "A small widget");
        assert_eq!(summary.item_price, 1999);
        assert_eq!(summary.quantity, 3);
        assert_eq!(summary.total_price, 3 * 1999);
        assert_eq!(summary.buyer_name, "Alice");
        assert_eq!(summary.seller_name, "Main Warehouse");
        assert_eq!(summary.status, OrderStatus::Delivered);
    }

    #[test]
    fn invoice_includes_id_total_and_parties() {
        let order = test_order(9, OrderStatus::Delivered);
        let invoice = order.invoice();
        assert!(invoice.starts_with("Invoice - Order #9"));
        assert!(invoice.contains("Total Price: £59.97"));
        assert!(invoice.contains("Buyer: Alice"));
        assert!(invoice.contains("Seller: Main Warehouse"));
    }

    #[test]
    fn counterparty_kind_predicates() {
        let w = Counterparty::warehouse("Main Warehouse");
        let s = Counterparty::supplier(SupplierId::from_raw(1), "Supplier A");
        let c = Counterparty::customer(CustomerId::from_raw(1), "Alice");
        assert!(w.is_warehouse() && !w.is_supplier());
        assert!(s.is_supplier() && !s.is_warehouse());
        assert!(!c.is_warehouse() && !c.is_supplier());
        assert_eq!(c.display_name(), "Alice");
    }
}
