//! Amount type for expense values
//!
//! Expense amounts are free decimal quantities in a single implicit currency.
//! They are stored on disk as bare JSON numbers, so the inner value is an
//! `f64` and all display rounds to two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::ExpenseError;

/// A spent amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse user input as an amount
    ///
    /// Surrounding whitespace is ignored. Negative values are accepted; text
    /// that is not a number, and non-finite values such as `inf` or `NaN`
    /// (which cannot be written back as JSON numbers), are rejected.
    pub fn parse(input: &str) -> Result<Self, ExpenseError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ExpenseError::InvalidAmount(input.to_string()))?;

        if !value.is_finite() {
            return Err(ExpenseError::InvalidAmount(input.to_string()));
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol, e.g. `₹150.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0.0 {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}
