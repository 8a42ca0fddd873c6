// 💾 Expense Store - JSON file persistence
//
// The whole collection is rewritten on every save. A missing file is an
// empty collection; anything else that goes wrong while reading is an error.

use crate::expense::Expense;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ExpenseStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection, or an empty one if the file does not exist yet
    pub fn load(&self) -> Result<Vec<Expense>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no expense file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read expense file: {:?}", self.path))
            }
        };

        let expenses: Vec<Expense> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse expense file: {:?}", self.path))?;

        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Overwrite the file with the full collection
    pub fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = to_indented_json(expenses).context("Failed to serialize expenses")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write expense file: {:?}", self.path))?;

        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}

fn to_indented_json(expenses: &[Expense]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    expenses.serialize(&mut ser)?;
    Ok(buf)
}

// ============================================================================
// TESTS
// ============================================================================
