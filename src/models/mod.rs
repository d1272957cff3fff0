//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record, its amount and category, the ledger of all records,
//! and the month used to scope reports.

pub mod amount;
pub mod category;
pub mod expense;
pub mod ledger;
pub mod period;
pub mod totals;

pub use amount::Amount;
pub use category::Category;
pub use expense::Expense;
pub use ledger::Ledger;
pub use period::ReportMonth;
pub use totals::CategoryTotals;
