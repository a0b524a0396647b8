use stockyard_core::{SupplierId, money};
use stockyard_parties::{Party, SupplierManager};

use crate::terminal;

pub fn menu(suppliers: &mut SupplierManager) -> anyhow::Result<()> {
    let Some(id) = select_or_create(suppliers)? else {
        return Ok(());
    };

    loop {
        let name = suppliers.get(id).map(|s| s.name().to_string())?;
        terminal::header(&format!("Supplier Menu ({name})"));
        terminal::info("1. View Catalog");
        terminal::info("2. Add Catalog Item");
        terminal::info("3. Remove Catalog Item");
        terminal::info("0. Back to Main Menu");

        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => view_catalog(suppliers, id)?,
            "2" => add_item(suppliers, id)?,
            "3" => remove_item(suppliers, id)?,
            "0" => return Ok(()),
            _ => terminal::invalid_choice(),
        }
    }
}

fn select_or_create(suppliers: &mut SupplierManager) -> anyhow::Result<Option<SupplierId>> {
    terminal::header("Supplier Login");
    if !suppliers.is_empty() {
        for supplier in suppliers.all() {
            terminal::info(format!(
                "ID: {} | Name: {}",
                supplier.id(),
                supplier.name()
            ));
        }
        terminal::info("Enter a supplier number to log in, 'n' for a new account, 'q' to cancel.");
    } else {
        terminal::info("No suppliers yet. Enter 'n' to create an account, 'q' to cancel.");
    }

    loop {
        let raw = terminal::prompt("Supplier")?;
        match raw.as_str() {
            "q" | "Q" => return Ok(None),
            "n" | "N" => {
                let name = terminal::prompt("Name")?;
                let email = terminal::prompt("Email")?;
                match suppliers.create_supplier(name, email) {
                    Ok(supplier) => {
                        terminal::success(format!("Welcome, {}!", supplier.name()));
                        return Ok(Some(supplier.id()));
                    }
                    Err(err) => terminal::error(err),
                }
            }
            other => match other.trim_start_matches("su_").parse::<u32>() {
                Ok(raw_id) => {
                    let id = SupplierId::from_raw(raw_id);
                    match suppliers.get(id) {
                        Ok(supplier) => {
                            terminal::success(format!("Welcome back, {}!", supplier.name()));
                            return Ok(Some(id));
                        }
                        Err(err) => terminal::error(err),
                    }
                }
                Err(_) => terminal::invalid_choice(),
            },
        }
    }
}

fn view_catalog(suppliers: &SupplierManager, id: SupplierId) -> anyhow::Result<()> {
    terminal::header("Catalog");
    let catalog = suppliers.supplier_items(id)?;
    if catalog.is_empty() {
        terminal::info("No items in the catalog.");
        return Ok(());
    }
    for (idx, item) in catalog.iter().enumerate() {
        terminal::info(format!(
            "{}. {}: {} - {}",
            idx + 1,
            item.name(),
            item.description(),
            money::format(item.price())
        ));
    }
    Ok(())
}

fn add_item(suppliers: &mut SupplierManager, id: SupplierId) -> anyhow::Result<()> {
    terminal::header("Add Catalog Item");
    let name = terminal::prompt("Item name")?;
    let description = terminal::prompt("Description")?;
    let price = terminal::prompt_price("Price")?;
    match suppliers.create_supplier_item(id, name, description, price) {
        Ok(item) => terminal::success(format!("Added {} to the catalog.", item.name())),
        Err(err) => terminal::error(err),
    }
    Ok(())
}

fn remove_item(suppliers: &mut SupplierManager, id: SupplierId) -> anyhow::Result<()> {
    view_catalog(suppliers, id)?;
    let catalog = suppliers.supplier_items(id)?;
    if catalog.is_empty() {
        return Ok(());
    }
    let choice = terminal::prompt_u32("Select item number to remove")? as usize;
    let Some(key) = choice.checked_sub(1).and_then(|i| catalog.get(i)).map(|item| item.key())
    else {
        terminal::error("Invalid item selection.");
        return Ok(());
    };
    match suppliers.remove_item_from_supplier(id, &key) {
        Ok(()) => terminal::success(format!("Removed {}.", key.name)),
        Err(err) => terminal::error(err),
    }
    Ok(())
}
