use std::path::Path;

use tracing::warn;

use stockyard_core::money;
use stockyard_orders::{Order, OrderStatus, OrderSummary};

/// Compiles financial figures from a borrowed order history.
///
/// Revenue counts orders the warehouse sold and delivered; cost counts
/// orders a supplier sold that were actually received. Pending inbound
/// orders are committed money but not yet cost.
#[derive(Debug, Clone, Copy)]
pub struct FinanceReport<'a> {
    orders: &'a [Order],
}

impl<'a> FinanceReport<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    /// Sum of totals where the warehouse is the seller and the order was
    /// delivered.
    pub fn total_customer_revenue(&self) -> u64 {
        let revenue: u64 = self
            .customer_orders()
            .iter()
            .map(|order| order.total_price())
            .sum();
        if revenue == 0 {
            warn!("no delivered customer orders found");
        }
        revenue
    }

    /// Sum of totals where a supplier is the seller and the goods were
    /// received.
    pub fn total_supplier_costs(&self) -> u64 {
        let costs: u64 = self
            .supplier_orders()
            .iter()
            .map(|order| order.total_price())
            .sum();
        if costs == 0 {
            warn!("no received supplier orders found");
        }
        costs
    }

    /// Revenue minus costs. Can be negative.
    pub fn profit(&self) -> i64 {
        self.total_customer_revenue() as i64 - self.total_supplier_costs() as i64
    }

    /// Delivered orders sold by the warehouse.
    pub fn customer_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| {
                order.seller().is_warehouse() && order.status() == OrderStatus::Delivered
            })
            .collect()
    }

    /// Received orders sold by a supplier.
    pub fn supplier_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| {
                order.seller().is_supplier() && order.status() == OrderStatus::Received
            })
            .collect()
    }

    pub fn all_orders(&self) -> &[Order] {
        self.orders
    }

    pub fn summaries(&self) -> Vec<OrderSummary> {
        self.orders.iter().map(Order::summarise).collect()
    }
}

/// Render order rows as a fixed-width table.
pub fn render_orders_table(summaries: &[OrderSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10} {:<15} {:<5} {:<10} {:<15} {:<15} {:<10} {}\n",
        "Order ID", "Item", "Qty", "Total", "Buyer", "Seller", "Status", "Date"
    ));
    out.push_str(&"-".repeat(105));
    out.push('\n');
    for s in summaries {
        out.push_str(&format!(
            "{:<10} {:<15} {:<5} {:<10} {:<15} {:<15} {:<10} {}\n",
            s.order_id.to_string(),
            s.item_name,
            s.quantity,
            money::format(s.total_price),
            s.buyer_name,
            s.seller_name,
            s.status.to_string(),
            s.timestamp,
        ));
    }
    out
}

/// Serialize order rows to CSV (header row included).
pub fn export_orders_to_csv(summaries: &[OrderSummary]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for summary in summaries {
        writer.serialize(summary)?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

/// Serialize order rows to CSV and write them to `path`.
pub fn write_orders_csv(summaries: &[OrderSummary], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let csv = export_orders_to_csv(summaries)?;
    std::fs::write(path, csv)?;
    Ok(())
}

/// Serialize order rows to pretty-printed JSON.
pub fn export_orders_to_json(summaries: &[OrderSummary]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockyard_catalog::Item;
    use stockyard_core::{CustomerId, OrderId, SupplierId};
    use stockyard_orders::Counterparty;

    fn widget() -> Item {
        Item::new("Widget", "A small widget", 1000, None).unwrap()
    }

    fn sale(id: u64, quantity: u32) -> Order {
        Order::new(
            OrderId::from_raw(id),
            widget(),
            quantity,
            Counterparty::customer(CustomerId::from_raw(1), "Alice"),
            Counterparty::warehouse("Main Warehouse"),
            OrderStatus::Delivered,
        )
        .unwrap()
    }

    fn purchase(id: u64, quantity: u32, status: OrderStatus) -> Order {
        Order::new(
            OrderId::from_raw(id),
            widget(),
            quantity,
            Counterparty::warehouse("Main Warehouse"),
            Counterparty::supplier(SupplierId::from_raw(1), "Supplier A"),
            status,
        )
        .unwrap()
    }

    fn mixed_book() -> Vec<Order> {
        vec![
            sale(1, 3),                                // revenue 3000
            sale(2, 2),                                // revenue 2000
            purchase(3, 4, OrderStatus::Received),     // cost 4000
            purchase(4, 10, OrderStatus::Pending),     // committed, not cost
        ]
    }

    #[test]
    fn revenue_counts_delivered_warehouse_sales_only() {
        let orders = mixed_book();
        let report = FinanceReport::new(&orders);
        assert_eq!(report.total_customer_revenue(), 5000);
        assert_eq!(report.customer_orders().len(), 2);
    }

    #[test]
    fn costs_count_received_supplier_orders_only() {
        let orders = mixed_book();
        let report = FinanceReport::new(&orders);
        assert_eq!(report.total_supplier_costs(), 4000);
        assert_eq!(report.supplier_orders().len(), 1);
    }

    #[test]
    fn profit_is_revenue_minus_costs_and_may_be_negative() {
        let orders = mixed_book();
        assert_eq!(FinanceReport::new(&orders).profit(), 1000);

        let losses = vec![purchase(1, 10, OrderStatus::Received)];
        assert_eq!(FinanceReport::new(&losses).profit(), -10_000);
    }

    #[test]
    fn empty_book_reports_zero_everywhere() {
        let orders: Vec<Order> = Vec::new();
        let report = FinanceReport::new(&orders);
        assert_eq!(report.total_customer_revenue(), 0);
        assert_eq!(report.total_supplier_costs(), 0);
        assert_eq!(report.profit(), 0);
        assert!(report.all_orders().is_empty());
    }

    #[test]
    fn csv_export_has_header_and_one_row_per_order() {
        let orders = mixed_book();
        let report = FinanceReport::new(&orders);
        let csv = export_orders_to_csv(&report.summaries()).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + orders.len());
        assert!(lines[0].starts_with("order_id,item_name,item_description"));
        assert!(lines[1].contains("Widget"));
        assert!(lines[1].contains("delivered"));
    }

    #[test]
    fn json_export_round_trips_the_summaries() {
        let orders = mixed_book();
        let report = FinanceReport::new(&orders);
        let json = export_orders_to_json(&report.summaries()).unwrap();
        let parsed: Vec<OrderSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report.summaries());
    }

    #[test]
    fn table_render_includes_every_order_and_the_header() {
        let orders = mixed_book();
        let report = FinanceReport::new(&orders);
        let table = render_orders_table(&report.summaries());
        assert!(table.starts_with("Order ID"));
        assert_eq!(table.lines().count(), 2 + orders.len());
        assert!(table.contains("£30.00"));
        assert!(table.contains("Supplier A"));
    }
}
