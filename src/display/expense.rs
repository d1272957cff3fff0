//! Expense display formatting
//!
//! Formats expense rows for terminal output.

use crate::models::{Amount, Expense};

use super::report::separator;

const TABLE_WIDTH: usize = 58;

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], total: Amount, symbol: &str) -> String {
    let mut output = String::new();

    let amount_header = format!("Amount ({})", symbol);
    output.push_str(&format!(
        "{:<12} {:<20} {:<12} {:>10}\n",
        "Date", "Description", "Category", amount_header
    ));
    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:<12} {:<20} {:<12} {:>10}\n",
            expense.date_key(),
            expense.description,
            expense.category,
            expense.amount.to_string(),
        ));
    }

    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<46} {}\n",
        "Total Spent:",
        total.format_with_symbol(symbol)
    ));

    output
}

/// Format one expense as a report line, e.g. `2024-01-15 | Coffee | ₹150.50 | Food`
pub fn format_expense_line(expense: &Expense, symbol: &str) -> String {
    format!(
        "{} | {} | {} | {}",
        expense.date_key(),
        expense.description,
        expense.amount.format_with_symbol(symbol),
        expense.category
    )
}
