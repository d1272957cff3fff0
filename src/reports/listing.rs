//! Expense listing
//!
//! Every expense in ledger order with the total spent.

use std::io::Write;

use crate::display::{format_expense_table, format_title};
use crate::error::ExpenseResult;
use crate::models::{Amount, Expense, Ledger};

use super::{write_expenses_csv, EmptyResult, ReportOutcome};

/// Full listing of the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseListing {
    /// All expenses in creation order
    pub expenses: Vec<Expense>,
    /// Sum of every amount
    pub total: Amount,
}

impl ExpenseListing {
    /// Build the listing from a ledger
    pub fn generate(ledger: &Ledger) -> ReportOutcome<Self> {
        if ledger.is_empty() {
            return ReportOutcome::Empty(EmptyResult::NoExpenses);
        }

        ReportOutcome::Ready(Self {
            expenses: ledger.expenses().to_vec(),
            total: ledger.total(),
        })
    }

    /// Number of listed expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Format the listing for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format_title("Expense List"));
        output.push('\n');
        output.push_str(&format_expense_table(
            &self.expenses,
            self.total,
            currency_symbol,
        ));
        output
    }

    /// Export the listing to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        write_expenses_csv(writer, &self.expenses)
    }
}
