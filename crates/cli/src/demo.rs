//! Demo seed data: two customers, two suppliers with a shared catalog of
//! block-themed items, a handful of received and pending supplier orders,
//! and a run of Gold Ore sales that leaves it sitting below its threshold.

use anyhow::Context;

use stockyard_core::CustomerId;

use crate::App;

pub fn seed(app: &mut App) -> anyhow::Result<()> {
    app.customers.create_customer("Bkar", "mock@mockemail.com")?;
    app.customers
        .create_customer("Aisha", "anothermock@mockemail.com")?;

    let steve = app
        .suppliers
        .create_supplier("Steve", "mocksupplier@mockemail.com")?
        .id();
    let alex = app
        .suppliers
        .create_supplier("Alex", "mocksupplier@mockemail.com")?
        .id();

    app.suppliers
        .create_supplier_item(steve, "Dirt", "Just dirt", 1000)?;
    app.suppliers
        .create_supplier_item(alex, "Cobblestone", "Rough stone", 2000)?;
    app.suppliers
        .create_supplier_item(steve, "Oak Wood", "Strong wood", 1500)?;
    app.suppliers
        .create_supplier_item(alex, "Birch Wood", "Light wood", 2500)?;
    app.suppliers
        .create_supplier_item(steve, "Stone", "Solid stone", 3000)?;
    app.suppliers
        .create_supplier_item(alex, "Iron Ore", "Metallic ore", 3500)?;
    app.suppliers
        .create_supplier_item(steve, "Gold Ore", "Shiny ore", 4000)?;
    app.suppliers
        .create_supplier_item(alex, "Spruce Wood", "Dark wood", 5000)?;

    // Replenishment runs, confirmed on arrival.
    let mut received = Vec::new();
    for (supplier_id, item_idx, quantity) in [
        (alex, 0, 128),  // Cobblestone
        (steve, 0, 64),  // Dirt
        (alex, 0, 32),   // Cobblestone
        (steve, 0, 16),  // Dirt
        (alex, 0, 8),    // Cobblestone
        (steve, 3, 100), // Gold Ore
    ] {
        let supplier = app.suppliers.get(supplier_id)?;
        let item = supplier
            .catalog()
            .get(item_idx)
            .context("demo catalog item missing")?
            .clone();
        let order = app.warehouse.order_from_supplier(supplier, &item, quantity)?;
        received.push(order.id());
    }
    for id in received {
        app.warehouse.mark_order_as_received(id)?;
    }

    // Left pending so the admin menu has something to confirm.
    for (supplier_id, item_idx, quantity) in [(steve, 1, 128), (alex, 1, 64)] {
        let supplier = app.suppliers.get(supplier_id)?;
        let item = supplier
            .catalog()
            .get(item_idx)
            .context("demo catalog item missing")?
            .clone();
        app.warehouse.order_from_supplier(supplier, &item, quantity)?;
    }

    // Marked up for resale.
    app.warehouse.update_price("Gold Ore", 50_000)?;

    let gold_ore = app
        .warehouse
        .view_inventory()
        .into_iter()
        .map(|(item, _, _)| item)
        .find(|item| item.name() == "Gold Ore")
        .context("demo Gold Ore stock missing")?;

    for (customer_id, quantity) in [(1, 5), (2, 10), (1, 80)] {
        let customer = app.customers.get_mut(CustomerId::from_raw(customer_id))?;
        app.warehouse.place_order(customer, &gold_ore, quantity)?;
    }

    // 5 left on hand, so this trips the low stock alert.
    app.warehouse.set_threshold("Gold Ore", 10)?;
    Ok(())
}
