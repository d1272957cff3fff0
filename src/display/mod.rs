//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and report pieces for
//! terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_line, format_expense_table};
pub use report::{format_bar, format_percentage, format_title, label_width, separator};
