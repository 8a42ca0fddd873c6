// ⚙️ Runtime configuration
//
// The program takes no flags; everything here is a fixed default.

use std::path::{Path, PathBuf};

/// Default location of the persisted collection, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
