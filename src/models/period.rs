//! Report month representation
//!
//! A calendar month used to scope the monthly report. Matching against
//! expenses is a prefix match on the stored `YYYY-MM-DD` date text.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A (year, month) pair with a four-digit year and a month in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    /// Create a report month, validating both parts
    pub fn new(year: i32, month: u32) -> Result<Self, ExpenseError> {
        if !(1..=12).contains(&month) {
            return Err(ExpenseError::InvalidMonth(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        if !(1000..=9999).contains(&year) {
            return Err(ExpenseError::InvalidMonth(format!(
                "year must have four digits, got {}",
                year
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse the separate month (`MM` or `M`) and year (`YYYY`) answers
    pub fn from_parts(month: &str, year: &str) -> Result<Self, ExpenseError> {
        let month_num: u32 = month
            .trim()
            .parse()
            .map_err(|_| ExpenseError::InvalidMonth(format!("'{}' is not a month", month.trim())))?;
        let year_num: i32 = year
            .trim()
            .parse()
            .map_err(|_| ExpenseError::InvalidMonth(format!("'{}' is not a year", year.trim())))?;
        Self::new(year_num, month_num)
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Date prefix shared by every day in this month, e.g. `2024-01`
    pub fn prefix(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Check whether a stored `YYYY-MM-DD` date string falls in this month
    pub fn matches(&self, date_key: &str) -> bool {
        date_key.starts_with(&self.prefix())
    }

    /// Human label used in report headers, e.g. `01/2024`
    pub fn label(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())
    }
}

impl FromStr for ReportMonth {
    type Err = ExpenseError;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| ExpenseError::InvalidMonth(format!("expected YYYY-MM, got '{}'", s)))?;
        Self::from_parts(month, year)
    }
}
