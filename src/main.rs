use anyhow::Result;
use std::io;
use tracing::info;

use expense_tracker::{logging, Config, ExpenseStore, ExpenseTracker, Shell, VERSION};

fn main() -> Result<()> {
    let config = Config::default();
    logging::init(&config);
    info!(version = VERSION, data_file = %config.data_file().display(), "starting expense tracker");

    let mut tracker = ExpenseTracker::open(ExpenseStore::new(config.data_file()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut tracker, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
