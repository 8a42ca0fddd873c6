// Expense Tracker - Core Library
// Exposes the record type, JSON store, tracker and interactive shell

pub mod config;
pub mod expense;
pub mod logging;
pub mod shell;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use config::{Config, DEFAULT_DATA_FILE};
pub use expense::Expense;
pub use shell::{InputError, MenuChoice, Shell, ShellState};
pub use store::ExpenseStore;
pub use tracker::{ExpenseTracker, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
