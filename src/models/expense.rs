//! Expense record model
//!
//! An expense is a single spending event. Once appended to the ledger it is
//! never modified.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;

/// A recorded spending event
///
/// Serialized with the keys `date`, `description`, `amount`, `category`; the
/// date is written as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the expense was recorded
    pub date: NaiveDate,

    /// Free-text label
    pub description: String,

    /// Amount spent
    pub amount: Amount,

    /// Category label
    pub category: Category,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Amount,
        category: Category,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category,
        }
    }

    /// The stored `YYYY-MM-DD` form of the date
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date_key(),
            self.description,
            self.amount,
            self.category
        )
    }
}
