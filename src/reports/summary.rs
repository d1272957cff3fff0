//! Category summary
//!
//! Subtotals per category, in the order categories first appear in the
//! ledger, with the grand total.

use std::io::Write;

use crate::display::{format_title, label_width, separator};
use crate::error::ExpenseResult;
use crate::models::{Amount, CategoryTotals, Ledger};

use super::{EmptyResult, ReportOutcome};

/// Spending grouped by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    /// Subtotal per exact category label
    pub totals: CategoryTotals,
    /// Sum of all subtotals
    pub total: Amount,
    /// Number of expenses summarized
    pub expense_count: usize,
}

impl CategorySummary {
    /// Group the ledger by category
    pub fn generate(ledger: &Ledger) -> ReportOutcome<Self> {
        if ledger.is_empty() {
            return ReportOutcome::Empty(EmptyResult::NoExpenses);
        }

        let totals = ledger.category_totals();
        let total = totals.total();

        ReportOutcome::Ready(Self {
            totals,
            total,
            expense_count: ledger.len(),
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let width = label_width(self.totals.labels(), 15);
        let mut output = String::new();

        output.push_str(&format_title("Expense Summary"));
        output.push('\n');

        for (category, amount) in self.totals.iter() {
            output.push_str(&format!(
                "{:<width$}: {}\n",
                category.as_str(),
                amount.format_with_symbol(currency_symbol),
                width = width,
            ));
        }

        output.push_str(&separator(30));
        output.push('\n');
        output.push_str(&format!(
            "Total: {}\n",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the summary to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Percentage"])?;

        let shares = self.totals.shares();
        for (category, pct) in &shares {
            let amount = self.totals.get(category.as_str()).unwrap_or_default();
            csv.write_record([
                category.to_string(),
                format!("{:.2}", amount.value()),
                format!("{:.2}", pct),
            ])?;
        }

        // Sum of the rows above: 100 normally, 0 when everything nets to zero
        let total_pct: f64 = shares.iter().map(|(_, pct)| pct).sum();
        csv.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total.value()),
            format!("{:.2}", total_pct),
        ])?;

        csv.flush()?;
        Ok(())
    }
}
