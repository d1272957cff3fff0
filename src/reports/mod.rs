//! Reports module for the expense tracker
//!
//! Provides the three read-only views over the ledger: the full expense
//! listing, the per-category summary and the monthly report. Each report
//! formats itself for the terminal and exports to CSV.

pub mod listing;
pub mod monthly;
pub mod summary;

pub use listing::ExpenseListing;
pub use monthly::MonthlyReport;
pub use summary::CategorySummary;

use std::fmt;
use std::io::Write;

use crate::error::ExpenseResult;
use crate::models::{Expense, ReportMonth};

/// Why a report has nothing to show
///
/// This is an informational outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResult {
    /// The ledger holds no expenses at all
    NoExpenses,
    /// Expenses exist, but none in the requested month
    NoRecordsForMonth(ReportMonth),
}

impl fmt::Display for EmptyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyResult::NoExpenses => write!(f, "No expenses recorded yet!"),
            EmptyResult::NoRecordsForMonth(_) => write!(f, "No records for this month!"),
        }
    }
}

/// Result of generating a report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome<T> {
    /// The report has data
    Ready(T),
    /// Nothing to report
    Empty(EmptyResult),
}

impl<T> ReportOutcome<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReportOutcome::Empty(_))
    }

    /// The report, if there was data
    pub fn ready(self) -> Option<T> {
        match self {
            ReportOutcome::Ready(report) => Some(report),
            ReportOutcome::Empty(_) => None,
        }
    }

    /// The empty reason, if there was no data
    pub fn empty_reason(&self) -> Option<EmptyResult> {
        match self {
            ReportOutcome::Ready(_) => None,
            ReportOutcome::Empty(reason) => Some(*reason),
        }
    }
}

/// Write expense rows as CSV with a header line
pub(crate) fn write_expenses_csv<W: Write>(writer: W, expenses: &[Expense]) -> ExpenseResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Description", "Category", "Amount"])?;

    for expense in expenses {
        csv.write_record([
            expense.date_key(),
            expense.description.clone(),
            expense.category.to_string(),
            format!("{:.2}", expense.amount.value()),
        ])?;
    }

    csv.flush()?;
    Ok(())
}
