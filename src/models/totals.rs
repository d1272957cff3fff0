//! Per-category subtotals
//!
//! Keeps categories in the order they were first seen, which is the order
//! the summary and the charts present them in.

use super::amount::Amount;
use super::category::Category;

/// Ordered mapping from category label to summed amount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Amount)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category, creating the group on first sight
    ///
    /// Categories are compared by exact text.
    pub fn add(&mut self, category: &Category, amount: Amount) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, subtotal)) => *subtotal += amount,
            None => self.entries.push((category.clone(), amount)),
        }
    }

    /// Subtotal for a category, if any expense used it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.entries
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, amount)| *amount)
    }

    /// Iterate in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&Category, Amount)> {
        self.entries.iter().map(|(c, a)| (c, *a))
    }

    /// Category labels in order
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all subtotals
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|(_, a)| *a).sum()
    }

    /// Share of the total for each category, in percent
    ///
    /// Returns zero shares when the total is zero.
    pub fn shares(&self) -> Vec<(&Category, f64)> {
        let total = self.total().value();
        self.entries
            .iter()
            .map(|(c, a)| {
                let pct = if total == 0.0 {
                    0.0
                } else {
                    a.value() / total * 100.0
                };
                (c, pct)
            })
            .collect()
    }

    /// Largest subtotal, used to scale bar charts
    pub fn max(&self) -> Amount {
        self.entries
            .iter()
            .map(|(_, a)| *a)
            .fold(Amount::zero(), |m, a| if a > m { a } else { m })
    }
}

impl<'a> FromIterator<(&'a Category, Amount)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (&'a Category, Amount)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (category, amount) in iter {
            totals.add(category, amount);
        }
        totals
    }
}
