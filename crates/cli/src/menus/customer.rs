use stockyard_core::{CustomerId, money};
use stockyard_parties::{CustomerManager, Party};
use stockyard_warehouse::Warehouse;

use crate::terminal;

pub fn menu(warehouse: &mut Warehouse, customers: &mut CustomerManager) -> anyhow::Result<()> {
    let Some(id) = select_or_create(customers)? else {
        return Ok(());
    };

    loop {
        let name = customers.get(id).map(|c| c.name().to_string())?;
        terminal::header(&format!("Customer Menu ({name})"));
        terminal::info("1. Browse Available Items");
        terminal::info("2. Place an Order");
        terminal::info("3. View Order History");
        terminal::info("0. Back to Main Menu");

        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => browse_available(warehouse),
            "2" => place_order(warehouse, customers, id)?,
            "3" => view_history(customers, id)?,
            "0" => return Ok(()),
            _ => terminal::invalid_choice(),
        }
    }
}

fn select_or_create(customers: &mut CustomerManager) -> anyhow::Result<Option<CustomerId>> {
    terminal::header("Customer Login");
    if !customers.is_empty() {
        for customer in customers.all() {
            terminal::info(format!(
                "ID: {} | Name: {}",
                customer.id(),
                customer.name()
            ));
        }
        terminal::info("Enter a customer number to log in, 'n' for a new account, 'q' to cancel.");
    } else {
        terminal::info("No customers yet. Enter 'n' to create an account, 'q' to cancel.");
    }

    loop {
        let raw = terminal::prompt("Customer")?;
        match raw.as_str() {
            "q" | "Q" => return Ok(None),
            "n" | "N" => {
                let name = terminal::prompt("Name")?;
                let email = terminal::prompt("Email")?;
                match customers.create_customer(name, email) {
                    Ok(customer) => {
                        terminal::success(format!("Welcome, {}!", customer.name()));
                        return Ok(Some(customer.id()));
                    }
                    Err(err) => terminal::error(err),
                }
            }
            other => match other.trim_start_matches("cu_").parse::<u32>() {
                Ok(raw_id) => {
                    let id = CustomerId::from_raw(raw_id);
                    match customers.get(id) {
                        Ok(customer) => {
                            terminal::success(format!("Welcome back, {}!", customer.name()));
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

fn browse_available(warehouse: &Warehouse) {
    terminal::header("Available Items");
    let available = warehouse.available_items();
    if available.is_empty() {
        terminal::info("Nothing is available to order right now.");
        return;
    }
    for (idx, (item, quantity)) in available.iter().enumerate() {
        terminal::info(format!(
            "{}. {} - {} ({} in stock)",
            idx + 1,
            item.name(),
            money::format(item.price()),
            quantity
        ));
    }
}

fn place_order(
    warehouse: &mut Warehouse,
    customers: &mut CustomerManager,
    id: CustomerId,
) -> anyhow::Result<()> {
    let available = warehouse.available_items();
    if available.is_empty() {
        terminal::info("Nothing is available to order right now.");
        return Ok(());
    }
    browse_available(warehouse);

    let choice = terminal::prompt_u32("Select item number to order")? as usize;
    let Some((item, _)) = choice.checked_sub(1).and_then(|i| available.get(i)) else {
        terminal::error("Invalid item selection.");
        return Ok(());
    };
    let quantity = terminal::prompt_u32("Enter quantity")?;

    let customer = customers.get_mut(id)?;
    match warehouse.place_order(customer, item, quantity) {
        Ok(order) => {
            terminal::success("Order placed.");
            terminal::info(order.invoice());
        }
        Err(err) => terminal::error(format!("{err}. Order not placed.")),
    }
    Ok(())
}

fn view_history(customers: &CustomerManager, id: CustomerId) -> anyhow::Result<()> {
    terminal::header("Order History");
    let customer = customers.get(id)?;
    if customer.order_history().is_empty() {
        terminal::info("No orders yet.");
        return Ok(());
    }
    for order in customer.order_history() {
        terminal::info(format!(
            "{} | {} x{} | {} | {}",
            order.id(),
            order.item().name(),
            order.quantity(),
            money::format(order.total_price()),
            order.status()
        ));
    }
    Ok(())
}
