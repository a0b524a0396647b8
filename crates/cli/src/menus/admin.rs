use stockyard_core::{OrderId, money};
use stockyard_finance::{self as finance, FinanceReport};
use stockyard_parties::{Party, SupplierManager};
use stockyard_warehouse::Warehouse;

use crate::{App, terminal};

pub fn menu(app: &mut App) -> anyhow::Result<()> {
    loop {
        show_low_stock_alerts(&app.warehouse);

        terminal::header("Admin Menu");
        terminal::info("1. Manage Stock");
        terminal::info("2. Manage Finances");
        terminal::info("0. Back to Main Menu");

        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => manage_stock(&mut app.warehouse, &app.suppliers)?,
            "2" => manage_finances(&app.warehouse)?,
            "0" => return Ok(()),
            _ => terminal::invalid_choice(),
        }
    }
}

fn show_low_stock_alerts(warehouse: &Warehouse) {
    let low: Vec<_> = warehouse
        .inventory()
        .entries()
        .filter(|entry| entry.is_low())
        .collect();
    if low.is_empty() {
        return;
    }
    terminal::header("Admin Alerts");
    terminal::info("Low Stock Alerts:");
    for entry in low {
        terminal::info(format!(
            "- {} (Qty: {}, Threshold: {})",
            entry.item().name(),
            entry.quantity(),
            entry.threshold()
        ));
    }
}

fn manage_stock(warehouse: &mut Warehouse, suppliers: &SupplierManager) -> anyhow::Result<()> {
    loop {
        terminal::header("Manage Warehouse Stock");
        terminal::info(format!("You're logged in as Admin at: {}", warehouse.name()));
        terminal::info("1. Order from Supplier");
        terminal::info("2. View Inventory");
        terminal::info("3. Edit Inventory Prices");
        terminal::info("4. Edit Inventory Stock Thresholds");
        terminal::info("5. Mark Order as Received");
        terminal::info("6. List Pending Orders");
        terminal::info("0. Back to Admin Menu");

        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => order_from_supplier(warehouse, suppliers)?,
            "2" => view_inventory(warehouse),
            "3" => edit_price(warehouse)?,
            "4" => edit_threshold(warehouse)?,
            "5" => mark_order_received(warehouse)?,
            "6" => list_pending_orders(warehouse),
            "0" => return Ok(()),
            _ => terminal::invalid_choice(),
        }
    }
}

fn order_from_supplier(
    warehouse: &mut Warehouse,
    suppliers: &SupplierManager,
) -> anyhow::Result<()> {
    terminal::header("Order from Supplier");
    if suppliers.is_empty() {
        terminal::error("No suppliers available.");
        return Ok(());
    }
    for supplier in suppliers.all() {
        terminal::info(format!("ID: {} | Name: {}", supplier.id(), supplier.name()));
    }

    let raw = terminal::prompt("Enter the supplier number to order from (or 'q' to cancel)")?;
    if raw.eq_ignore_ascii_case("q") {
        return Ok(());
    }
    let Ok(raw_id) = raw.trim_start_matches("su_").parse::<u32>() else {
        terminal::invalid_choice();
        return Ok(());
    };
    let supplier = match suppliers.get(stockyard_core::SupplierId::from_raw(raw_id)) {
        Ok(supplier) => supplier,
        Err(err) => {
            terminal::error(err);
            return Ok(());
        }
    };

    let catalog = supplier.catalog();
    if catalog.is_empty() {
        terminal::error(format!("Supplier {} has no items.", supplier.name()));
        return Ok(());
    }
    terminal::header(&format!("Items Supplied by {}", supplier.name()));
    for (idx, item) in catalog.iter().enumerate() {
        terminal::info(format!(
            "{}. {} - {}",
            idx + 1,
            item.name(),
            money::format(item.price())
        ));
    }

    let choice = terminal::prompt_u32("Select item number to order")? as usize;
    let Some(item) = choice.checked_sub(1).and_then(|i| catalog.get(i)) else {
        terminal::error("Invalid item selection.");
        return Ok(());
    };
    let quantity = terminal::prompt_u32("Enter quantity to order")?;

    match warehouse.order_from_supplier(supplier, item, quantity) {
        Ok(order) => terminal::success(format!(
            "Ordered {} of {} from {} (order {}, pending).",
            quantity,
            item.name(),
            supplier.name(),
            order.id()
        )),
        Err(err) => terminal::error(format!("{err}. Order not placed.")),
    }
    Ok(())
}

fn view_inventory(warehouse: &Warehouse) {
    terminal::header("View Inventory");
    let inventory = warehouse.view_inventory();
    if inventory.is_empty() {
        terminal::info("Inventory is empty.");
        return;
    }
    for (item, quantity, threshold) in inventory {
        terminal::info(format!(
            "{} | Quantity: {quantity} | Threshold: {threshold}",
            item.details()
        ));
    }
}

fn edit_price(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    view_inventory(warehouse);
    if warehouse.inventory().is_empty() {
        return Ok(());
    }
    let name = terminal::prompt("Item name")?;
    let price = terminal::prompt_price("New price")?;
    match warehouse.update_price(&name, price) {
        Ok(()) => terminal::success(format!("Updated {name} to {}.", money::format(price))),
        Err(err) => terminal::error(err),
    }
    Ok(())
}

fn edit_threshold(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    view_inventory(warehouse);
    if warehouse.inventory().is_empty() {
        return Ok(());
    }
    let name = terminal::prompt("Item name")?;
    let threshold = terminal::prompt_u32("New threshold")?;
    match warehouse.set_threshold(&name, threshold) {
        Ok(()) => terminal::success(format!("Threshold for {name} set to {threshold}.")),
        Err(err) => terminal::error(err),
    }
    Ok(())
}

fn mark_order_received(warehouse: &mut Warehouse) -> anyhow::Result<()> {
    list_pending_orders(warehouse);
    let raw = terminal::prompt("Enter order number to mark received")?;
    let Ok(raw_id) = raw.trim_start_matches('#').parse::<u64>() else {
        terminal::invalid_choice();
        return Ok(());
    };
    match warehouse.mark_order_as_received(OrderId::from_raw(raw_id)) {
        Ok(()) => terminal::success("Done."),
        Err(err) => terminal::error(err),
    }
    Ok(())
}

fn list_pending_orders(warehouse: &Warehouse) {
    terminal::header("Pending Orders");
    let pending = warehouse.list_pending_orders();
    if pending.is_empty() {
        terminal::info("No pending orders.");
        return;
    }
    for order in pending {
        terminal::info(format!(
            "{} | {} x{} | {} | {}",
            order.id(),
            order.item().name(),
            order.quantity(),
            money::format(order.total_price()),
            order.status()
        ));
    }
}

fn manage_finances(warehouse: &Warehouse) -> anyhow::Result<()> {
    loop {
        terminal::header("Manage Finances");
        terminal::info("1. Total Customer Revenue");
        terminal::info("2. Total Supplier Costs");
        terminal::info("3. Profit");
        terminal::info("4. Show All Orders");
        terminal::info("5. Export Orders to CSV");
        terminal::info("6. Export Orders to JSON");
        terminal::info("0. Back to Admin Menu");

        let report = FinanceReport::new(warehouse.orders());
        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => terminal::info(format!(
                "Total customer revenue: {}",
                money::format(report.total_customer_revenue())
            )),
            "2" => terminal::info(format!(
                "Total supplier costs: {}",
                money::format(report.total_supplier_costs())
            )),
            "3" => terminal::info(format!(
                "Profit: {}",
                money::format_signed(report.profit())
            )),
            "4" => terminal::info(finance::render_orders_table(&report.summaries())),
            "5" => {
                let path = terminal::prompt("File path")?;
                match finance::write_orders_csv(&report.summaries(), &path) {
                    Ok(()) => terminal::success(format!("Orders exported to {path}.")),
                    Err(err) => terminal::error(err),
                }
            }
            "6" => match finance::export_orders_to_json(&report.summaries()) {
                Ok(json) => terminal::info(json),
                Err(err) => terminal::error(err),
            },
            "0" => return Ok(()),
            _ => terminal::invalid_choice(),
        }
    }
}
