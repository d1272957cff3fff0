//! Expense category labels
//!
//! Categories are an open set of text labels. New expenses get their first
//! character upper-cased; stored categories are never rewritten, so grouping
//! is by the exact stored text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a spending event belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap a label exactly as given
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Build a category from user input, upper-casing the first character
    ///
    /// The remaining characters are kept as typed.
    pub fn normalized(input: &str) -> Self {
        let mut chars = input.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self(label)
    }

    /// Get the label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
