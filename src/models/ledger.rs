//! In-memory expense ledger
//!
//! The ledger holds every recorded expense in creation order. It is loaded
//! in full at the start of an operation and written back in full after an
//! append; see [`crate::storage::Storage`].

use super::amount::Amount;
use super::expense::Expense;
use super::period::ReportMonth;
use super::totals::CategoryTotals;

/// Ordered sequence of expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already loaded expenses, keeping their order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Append an expense, returning its position
    pub fn append(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len() - 1
    }

    /// All expenses in creation order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of every amount
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Expenses recorded in the given month, in ledger order
    pub fn in_month(&self, month: ReportMonth) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| month.matches(&e.date_key()))
            .cloned()
            .collect()
    }

    /// Subtotals grouped by exact category text
    pub fn category_totals(&self) -> CategoryTotals {
        self.expenses
            .iter()
            .map(|e| (&e.category, e.amount))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn expense(date: &str, description: &str, amount: f64, category: &str) -> Expense {
        Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            Amount::new(amount),
            Category::new(category),
        )
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_expenses(vec![
            expense("2024-01-15", "Lunch", 120.0, "Food"),
            expense("2024-02-01", "Train", 60.0, "Travel"),
            expense("2024-01-31", "Dinner", 80.5, "Food"),
        ])
    }

    #[test]
    fn test_append_keeps_order() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        let first = ledger.append(expense("2024-03-02", "B", 1.0, "Other"));
        let second = ledger.append(expense("2024-03-01", "A", 2.0, "Other"));

        assert_eq!((first, second), (0, 1));
        assert_eq!(ledger.expenses()[0].description, "B");
        assert_eq!(ledger.expenses()[1].description, "A");
    }

    #[test]
    fn test_total() {
        assert_eq!(sample_ledger().total(), Amount::new(260.5));
        assert_eq!(Ledger::new().total(), Amount::zero());
    }

    #[test]
    fn test_in_month() {
        let ledger = sample_ledger();
        let january = ledger.in_month(ReportMonth::new(2024, 1).unwrap());

        assert_eq!(january.len(), 2);
        assert_eq!(january[0].description, "Lunch");
        assert_eq!(january[1].description, "Dinner");

        assert!(ledger
            .in_month(ReportMonth::new(2024, 3).unwrap())
            .is_empty());
    }

    #[test]
    fn test_category_totals_conserve_total() {
        let ledger = sample_ledger();
        let totals = ledger.category_totals();

        assert_eq!(totals.labels(), vec!["Food", "Travel"]);
        assert_eq!(totals.get("Food"), Some(Amount::new(200.5)));
        assert_eq!(totals.total(), ledger.total());
    }
}
