//! Monthly report
//!
//! Expenses whose stored date falls in one month, with their subtotal.

use std::io::Write;

use crate::display::{format_expense_line, format_title};
use crate::error::ExpenseResult;
use crate::models::{Amount, Expense, Ledger, ReportMonth};

use super::{write_expenses_csv, EmptyResult, ReportOutcome};

/// Expenses of a single month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// Month reported on
    pub month: ReportMonth,
    /// Matching expenses in ledger order
    pub expenses: Vec<Expense>,
    /// Sum of the matching amounts
    pub total: Amount,
}

impl MonthlyReport {
    /// Filter the ledger to one month
    ///
    /// An empty ledger reports [`EmptyResult::NoExpenses`]; a ledger with
    /// nothing in the month reports [`EmptyResult::NoRecordsForMonth`].
    pub fn generate(ledger: &Ledger, month: ReportMonth) -> ReportOutcome<Self> {
        if ledger.is_empty() {
            return ReportOutcome::Empty(EmptyResult::NoExpenses);
        }

        let expenses = ledger.in_month(month);
        if expenses.is_empty() {
            return ReportOutcome::Empty(EmptyResult::NoRecordsForMonth(month));
        }

        let total = expenses.iter().map(|e| e.amount).sum();
        ReportOutcome::Ready(Self {
            month,
            expenses,
            total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let label = self.month.label();
        let mut output = String::new();

        output.push_str(&format_title(&format!("Report for {}", label)));
        output.push('\n');

        for expense in &self.expenses {
            output.push_str(&format_expense_line(expense, currency_symbol));
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&format!(
            "Total spent in {}: {}\n",
            label,
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the month's expenses to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        write_expenses_csv(writer, &self.expenses)
    }
}
