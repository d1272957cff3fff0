//! Reporting service
//!
//! Read-only views over the ledger. Every call reloads the expense file, so
//! a report always reflects what is on disk.

use crate::charts::ChartRenderer;
use crate::error::ExpenseResult;
use crate::models::ReportMonth;
use crate::reports::{CategorySummary, ExpenseListing, MonthlyReport, ReportOutcome};
use crate::storage::Storage;

/// Service producing expense reports
pub struct ReportingService<'a> {
    storage: &'a Storage,
}

impl<'a> ReportingService<'a> {
    /// Create a new reporting service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check whether any expense has been recorded
    pub fn has_expenses(&self) -> bool {
        !self.storage.load_ledger().is_empty()
    }

    /// Every expense in creation order with the overall total
    pub fn list_all(&self) -> ReportOutcome<ExpenseListing> {
        ExpenseListing::generate(&self.storage.load_ledger())
    }

    /// Subtotals per category, handing them to `charts` for drawing
    ///
    /// The renderer is only called when there is something to summarize.
    pub fn summarize_by_category(
        &self,
        charts: &mut dyn ChartRenderer,
    ) -> ExpenseResult<ReportOutcome<CategorySummary>> {
        let outcome = CategorySummary::generate(&self.storage.load_ledger());

        if let ReportOutcome::Ready(summary) = &outcome {
            charts.render(&summary.totals)?;
        }

        Ok(outcome)
    }

    /// Expenses recorded in one month with their subtotal
    pub fn monthly_report(&self, month: ReportMonth) -> ReportOutcome<MonthlyReport> {
        MonthlyReport::generate(&self.storage.load_ledger(), month)
    }
}
