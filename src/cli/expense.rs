//! CLI commands for recording and listing expenses

use crate::config::Settings;
use crate::display::format_expense_line;
use crate::error::ExpenseResult;
use crate::reports::ReportOutcome;
use crate::services::{EntryService, ReportingService};
use crate::storage::Storage;

/// Record one expense dated today
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    description: &str,
    amount: &str,
    category: &str,
) -> ExpenseResult<()> {
    let expense = EntryService::new(storage).add_expense(description, amount, category)?;

    println!("Expense added successfully!");
    println!(
        "  {}",
        format_expense_line(&expense, &settings.currency_symbol)
    );

    Ok(())
}

/// Print every expense with the overall total
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    match ReportingService::new(storage).list_all() {
        ReportOutcome::Ready(listing) => {
            print!("{}", listing.format_terminal(&settings.currency_symbol));
        }
        ReportOutcome::Empty(reason) => println!("{}", reason),
    }

    Ok(())
}
