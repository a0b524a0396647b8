mod demo;
mod menus;
mod terminal;

use clap::Parser;

use stockyard_parties::{CustomerManager, SupplierManager};
use stockyard_warehouse::Warehouse;

/// Stockyard: a small marketplace over one warehouse.
#[derive(Debug, Parser)]
#[command(name = "stockyard", version, about)]
struct CommandLine {
    /// Seed the session with demo customers, suppliers and orders.
    #[arg(long)]
    demo: bool,

    /// Warehouse display name.
    #[arg(long, default_value = "Main Warehouse")]
    warehouse: String,
}

/// Everything a session owns. The warehouse holds the transaction core;
/// the managers hold the identity records it references.
pub struct App {
    pub warehouse: Warehouse,
    pub customers: CustomerManager,
    pub suppliers: SupplierManager,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();
    stockyard_observability::init();

    let mut app = App {
        warehouse: Warehouse::new(args.warehouse),
        customers: CustomerManager::new(),
        suppliers: SupplierManager::new(),
    };

    if args.demo {
        demo::seed(&mut app)?;
        terminal::info("Demo data loaded.");
    }

    menus::main_menu(&mut app)
}
