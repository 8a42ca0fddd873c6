// 💸 Expense Record - one tracked transaction
//
// Fields are fixed and immutable once the record exists. The date is a plain
// calendar date (no time-of-day, no timezone) and is persisted as YYYY-MM-DD.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// EXPENSE
// ============================================================================

/// A single expense entry as stored in `expenses.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    amount: f64,
    description: String,
    category: String,
    date: NaiveDate,
}

impl Expense {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Expense {
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// True when the expense falls in the given 1-indexed month of `year`
    pub fn is_in_month(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }

    /// Exact, case-sensitive category match
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// One line per record: `date | category | description | $amount`, amount to
/// two decimals. Used when the shell lists the records behind a summary.
impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | ${:.2}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
