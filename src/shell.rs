// 🖥️ Interactive Shell - line-based menu over any reader/writer
//
// Two states: the menu prompt and terminated. Bad numeric input is reported
// and the shell goes back to the menu; I/O and persistence failures propagate.

use crate::tracker::{ExpenseTracker, Summary};
use anyhow::Result;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::warn;

// ============================================================================
// STATE & MENU
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MenuPrompt,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    MonthlySummary,
    CategorySummary,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddExpense),
            "2" => Some(MenuChoice::MonthlySummary),
            "3" => Some(MenuChoice::CategorySummary),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::MonthlySummary => "View Monthly Summary",
            MenuChoice::CategorySummary => "View Category Summary",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn all() -> [MenuChoice; 4] {
        [
            MenuChoice::AddExpense,
            MenuChoice::MonthlySummary,
            MenuChoice::CategorySummary,
            MenuChoice::Exit,
        ]
    }
}

/// Rejected user input; the message is what the user sees
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter numeric value for amount.")]
    InvalidAmount,

    #[error("Invalid input. Please enter numeric values for month and year.")]
    InvalidMonthYear,
}

/// Amounts must be finite; `inf` and `NaN` cannot be written back as JSON numbers
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(InputError::InvalidAmount)
}

pub fn parse_month(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidMonthYear)
}

pub fn parse_year(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidMonthYear)
}

// ============================================================================
// SHELL
// ============================================================================

pub struct Shell<'a, R, W> {
    tracker: &'a mut ExpenseTracker,
    input: R,
    output: W,
    state: ShellState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(tracker: &'a mut ExpenseTracker, input: R, output: W) -> Self {
        Shell {
            tracker,
            input,
            output,
            state: ShellState::MenuPrompt,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Run menu iterations until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == ShellState::MenuPrompt {}
        Ok(())
    }

    /// One pass through the menu
    pub fn step(&mut self) -> Result<ShellState> {
        if self.state == ShellState::Terminated {
            return Ok(self.state);
        }

        self.print_menu()?;

        let Some(choice) = self.ask("Choose an option: ")? else {
            return Ok(self.terminate());
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddExpense) => self.add_expense()?,
            Some(MenuChoice::MonthlySummary) => self.monthly_summary()?,
            Some(MenuChoice::CategorySummary) => self.category_summary()?,
            Some(MenuChoice::Exit) => {
                self.terminate();
            }
            None => {
                warn!(choice = %choice, "invalid menu choice");
                writeln!(self.output, "Invalid choice. Please choose a valid option.")?;
            }
        }

        Ok(self.state)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nExpense Tracker")?;
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> Result<()> {
        let Some(raw) = self.ask("Enter amount: ")? else {
            self.terminate();
            return Ok(());
        };
        let amount = match parse_amount(&raw) {
            Ok(amount) => amount,
            Err(e) => return self.reject(e),
        };

        let Some(description) = self.ask("Enter description: ")? else {
            self.terminate();
            return Ok(());
        };
        let Some(category) = self.ask("Enter category: ")? else {
            self.terminate();
            return Ok(());
        };

        self.tracker.add(amount, description, category)?;
        writeln!(self.output, "Expense added successfully.")?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> Result<()> {
        let Some(raw) = self.ask("Enter month (1-12): ")? else {
            self.terminate();
            return Ok(());
        };
        let month = match parse_month(&raw) {
            Ok(month) => month,
            Err(e) => return self.reject(e),
        };

        let Some(raw) = self.ask("Enter year (e.g., 2023): ")? else {
            self.terminate();
            return Ok(());
        };
        let year = match parse_year(&raw) {
            Ok(year) => year,
            Err(e) => return self.reject(e),
        };

        // Values outside the calendar's integer ranges can never match a date
        let summary = match (u32::try_from(month), i32::try_from(year)) {
            (Ok(m), Ok(y)) => self.tracker.monthly_summary(m, y),
            _ => Summary::default(),
        };

        self.print_summary(&format!("Monthly Summary for {}/{}", month, year), &summary)
    }

    fn category_summary(&mut self) -> Result<()> {
        let Some(category) = self.ask("Enter category: ")? else {
            self.terminate();
            return Ok(());
        };

        let summary = self.tracker.category_summary(&category);
        self.print_summary(&format!("Category Summary for {}", category), &summary)
    }

    fn print_summary(&mut self, title: &str, summary: &Summary) -> Result<()> {
        writeln!(self.output, "\n{}", title)?;
        writeln!(self.output, "Total Expenses: ${:.2}", summary.total())?;
        for expense in summary.expenses() {
            writeln!(self.output, "{}", expense)?;
        }
        Ok(())
    }

    fn reject(&mut self, error: InputError) -> Result<()> {
        warn!(%error, "rejected input");
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn terminate(&mut self) -> ShellState {
        self.state = ShellState::Terminated;
        self.state
    }

    /// Prompt and read one line without its line ending; None on end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::Expense;
    use crate::store::ExpenseStore;
    use chrono::{Local, NaiveDate};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn new_tracker(dir: &TempDir) -> ExpenseTracker {
        ExpenseTracker::with_expenses(ExpenseStore::new(dir.path().join("expenses.json")), Vec::new())
    }

    fn run_script(tracker: &mut ExpenseTracker, script: &str) -> String {
        let mut out = Vec::new();
        let mut shell = Shell::new(tracker, Cursor::new(script.as_bytes()), &mut out);
        shell.run().unwrap();
        assert_eq!(shell.state(), ShellState::Terminated);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(parse_amount(" 12.50 "), Ok(12.5));
        assert_eq!(parse_amount("abc"), Err(InputError::InvalidAmount));
        assert_eq!(parse_amount("inf"), Err(InputError::InvalidAmount));
        assert_eq!(parse_amount("-infinity"), Err(InputError::InvalidAmount));
        assert_eq!(parse_amount("NaN"), Err(InputError::InvalidAmount));
        assert_eq!(parse_year("99999999999"), Ok(99_999_999_999));
        assert_eq!(parse_month("3"), Ok(3));
        assert_eq!(parse_month("March"), Err(InputError::InvalidMonthYear));
        assert_eq!(parse_year("2024.0"), Err(InputError::InvalidMonthYear));
    }

    #[test]
    fn test_add_expense_through_menu() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "1\n12.50\ncoffee\nfood\n4\n");

        assert!(out.contains("Expense added successfully."));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.expenses()[0].description(), "coffee");
        assert_eq!(tracker.expenses()[0].category(), "food");
        assert_eq!(tracker.expenses()[0].date(), Local::now().date_naive());
        assert_eq!(tracker.store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_amount_leaves_collection_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "1\nabc\n4\n");

        assert!(out.contains("Invalid input. Please enter numeric value for amount."));
        // Amount is rejected before description/category are asked for
        assert!(!out.contains("Enter description: "));
        assert!(tracker.is_empty());
        assert!(!tracker.store().path().exists());
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "1\ninf\nx\ny\n1\nNaN\nx\ny\n4\n");

        assert_eq!(
            out.matches("Invalid input. Please enter numeric value for amount.").count(),
            2
        );
        assert!(!out.contains("Expense added successfully."));
        assert!(tracker.is_empty());
        assert!(!tracker.store().path().exists());
    }

    #[test]
    fn test_year_beyond_calendar_range_yields_empty_summary() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "2\n3\n99999999999\n4\n");

        assert!(!out.contains("Invalid input"));
        assert!(out.contains("Monthly Summary for 3/99999999999"));
        assert!(out.contains("Total Expenses: $0.00"));
    }

    #[test]
    fn test_monthly_summary_output() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        tracker.add_on(day, 12.50, "coffee", "food").unwrap();
        tracker.add_on(day, 40.00, "train ticket", "transport").unwrap();

        let out = run_script(&mut tracker, "2\n3\n2024\n4\n");

        assert!(out.contains("Monthly Summary for 3/2024"));
        assert!(out.contains("Total Expenses: $52.50"));
        assert!(out.contains("2024-03-05 | food | coffee | $12.50"));
        assert!(out.contains("2024-03-05 | transport | train ticket | $40.00"));
    }

    #[test]
    fn test_monthly_summary_rejects_non_numeric() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "2\nmarch\n4\n");

        assert!(out.contains("Invalid input. Please enter numeric values for month and year."));
        assert!(!out.contains("Enter year"));
        assert!(!out.contains("Monthly Summary for"));
    }

    #[test]
    fn test_negative_month_yields_empty_summary() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "2\n-1\n2024\n4\n");

        assert!(out.contains("Monthly Summary for -1/2024"));
        assert!(out.contains("Total Expenses: $0.00"));
    }

    #[test]
    fn test_category_summary_output() {
        let dir = TempDir::new().unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut tracker = ExpenseTracker::with_expenses(
            ExpenseStore::new(dir.path().join("expenses.json")),
            vec![
                Expense::new(12.5, "coffee", "food", day),
                Expense::new(40.0, "train ticket", "transport", day),
                Expense::new(7.25, "bagel", "food", day),
            ],
        );

        let out = run_script(&mut tracker, "3\nfood\n4\n");

        assert!(out.contains("Category Summary for food"));
        assert!(out.contains("Total Expenses: $19.75"));
        assert!(out.contains("bagel"));
        assert!(!out.contains("train ticket"));
    }

    #[test]
    fn test_invalid_choice_stays_at_menu() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "9\n4\n");

        assert!(out.contains("Invalid choice. Please choose a valid option."));
        assert_eq!(out.matches("Expense Tracker").count(), 2);
    }

    #[test]
    fn test_exit_stops_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        let out = run_script(&mut tracker, "4\n1\n5\nnever\nread\n");

        assert_eq!(out.matches("Choose an option: ").count(), 1);
        assert!(!tracker.store().path().exists());
    }

    #[test]
    fn test_end_of_input_terminates() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        run_script(&mut tracker, "");
        run_script(&mut tracker, "1\n5.0\n");

        assert!(tracker.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);

        run_script(&mut tracker, "1\r\n3\r\nbus\r\ntransport\r\n4\r\n");

        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.expenses()[0].category(), "transport");
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut tracker = new_tracker(&dir);
        let mut out = Vec::new();

        let mut shell = Shell::new(&mut tracker, Cursor::new("4\n".as_bytes()), &mut out);
        assert_eq!(shell.step().unwrap(), ShellState::Terminated);
        assert_eq!(shell.step().unwrap(), ShellState::Terminated);
    }
}
