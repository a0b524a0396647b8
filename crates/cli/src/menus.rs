//! Interactive menu loops. Domain errors are printed and the loop carries
//! on; nothing in here panics on bad input.

mod admin;
mod customer;
mod supplier;

use crate::{App, terminal};

pub fn main_menu(app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal::header("Main Menu");
        terminal::info("1. Admin Login");
        terminal::info("2. Customer Login");
        terminal::info("3. Supplier Login");
        terminal::info("0. Exit");

        match terminal::prompt("Enter your choice")?.as_str() {
            "1" => admin::menu(app)?,
            "2" => customer::menu(&mut app.warehouse, &mut app.customers)?,
            "3" => supplier::menu(&mut app.suppliers)?,
            "0" => {
                terminal::info("Exiting...");
                return Ok(());
            }
            _ => terminal::invalid_choice(),
        }
    }
}
