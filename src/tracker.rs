// 📊 Expense Tracker - in-memory collection backed by the store
//
// Every mutation persists the full collection before returning.

use crate::expense::Expense;
use crate::store::ExpenseStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

// ============================================================================
// SUMMARY
// ============================================================================

/// Total and matching records for one filter, in insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    total: f64,
    expenses: Vec<Expense>,
}

impl Summary {
    fn from_matches<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let expenses: Vec<Expense> = matches.into_iter().cloned().collect();
        let total = expenses.iter().map(Expense::amount).sum();
        Summary { total, expenses }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

// ============================================================================
// TRACKER
// ============================================================================

#[derive(Debug)]
pub struct ExpenseTracker {
    store: ExpenseStore,
    expenses: Vec<Expense>,
}

impl ExpenseTracker {
    /// Load the collection from `store` and take ownership of both
    pub fn open(store: ExpenseStore) -> Result<Self> {
        let expenses = store.load()?;
        info!(path = %store.path().display(), count = expenses.len(), "expense tracker opened");
        Ok(Self::with_expenses(store, expenses))
    }

    pub fn with_expenses(store: ExpenseStore, expenses: Vec<Expense>) -> Self {
        ExpenseTracker { store, expenses }
    }

    /// Record an expense dated today (local calendar date)
    pub fn add(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<&Expense> {
        self.add_on(Local::now().date_naive(), amount, description, category)
    }

    /// Record an expense with an explicit date
    pub fn add_on(
        &mut self,
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<&Expense> {
        let expense = Expense::new(amount, description, category, date);
        info!(amount, category = expense.category(), %date, "adding expense");

        self.expenses.push(expense);
        self.store.save(&self.expenses)?;

        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn monthly_summary(&self, month: u32, year: i32) -> Summary {
        let summary = Summary::from_matches(
            self.expenses.iter().filter(|e| e.is_in_month(month, year)),
        );
        debug!(month, year, matches = summary.len(), total = summary.total(), "monthly summary");
        summary
    }

    pub fn category_summary(&self, category: &str) -> Summary {
        let summary = Summary::from_matches(
            self.expenses.iter().filter(|e| e.is_in_category(category)),
        );
        debug!(category, matches = summary.len(), total = summary.total(), "category summary");
        summary
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }
}

// ============================================================================
// TESTS
// ============================================================================
