//! Expense entry service
//!
//! Turns the raw answers typed by the user into an expense record and
//! appends it to the ledger.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::ExpenseResult;
use crate::models::{Amount, Category, Expense};
use crate::storage::Storage;

/// Source of the current date
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Service for recording new expenses
pub struct EntryService<'a> {
    storage: &'a Storage,
    today: Clock,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service stamping expenses with the local date
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_clock(storage, local_today)
    }

    /// Create an entry service with a custom date source
    pub fn with_clock(storage: &'a Storage, today: Clock) -> Self {
        Self { storage, today }
    }

    /// Record a new expense
    ///
    /// The amount is parsed before anything is read or written, so an
    /// invalid amount leaves the expense file untouched. The category gets
    /// its first character upper-cased; the description is kept as given.
    pub fn add_expense(
        &self,
        description: &str,
        amount_input: &str,
        category: &str,
    ) -> ExpenseResult<Expense> {
        let amount = Amount::parse(amount_input)?;
        let category = Category::normalized(category);
        let expense = Expense::new((self.today)(), description, amount, category);

        let mut ledger = self.storage.load_ledger_for_update();
        let position = ledger.append(expense.clone());
        self.storage.save_ledger(&ledger)?;

        // The expense is saved at this point; a failed audit write must not
        // turn that into an error
        let _ = self.storage.log_create(
            EntityType::Expense,
            format!("{}#{}", expense.date_key(), position),
            Some(expense.description.clone()),
            &expense,
        );

        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ExpensePaths;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);

        let expense = service.add_expense("Coffee", "150.50", "food").unwrap();

        assert_eq!(expense.date, fixed_day());
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.amount, Amount::new(150.5));
        assert_eq!(expense.category.as_str(), "Food");

        let stored = storage.expenses.load();
        assert_eq!(stored, vec![expense]);
    }

    #[test]
    fn test_add_appends_in_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);

        service.add_expense("Coffee", "150.50", "food").unwrap();
        service.add_expense("Bus", "40", "Travel").unwrap();

        let stored = storage.expenses.load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].description, "Coffee");
        assert_eq!(stored[1].description, "Bus");
    }

    #[test]
    fn test_invalid_amount_leaves_store_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);
        service.add_expense("Coffee", "150.50", "food").unwrap();
        let before = fs::read(storage.expenses.path()).unwrap();

        let err = service.add_expense("Tea", "twenty", "food").unwrap_err();

        assert!(err.is_invalid_amount());
        assert_eq!(fs::read(storage.expenses.path()).unwrap(), before);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_amount_does_not_create_file() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);

        assert!(service.add_expense("Tea", "", "Food").is_err());
        assert!(!storage.expenses.exists());
    }

    #[test]
    fn test_permissive_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);

        let expense = service.add_expense("", "-25", "").unwrap();
        assert_eq!(expense.description, "");
        assert_eq!(expense.amount, Amount::new(-25.0));
        assert_eq!(expense.category.as_str(), "");
    }

    #[test]
    fn test_add_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = EntryService::with_clock(&storage, fixed_day);

        service.add_expense("Coffee", "150.50", "food").unwrap();
        service.add_expense("Bus", "40", "Travel").unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].entity_id, "2024-01-15#1");
        assert_eq!(entries[1].entity_name.as_deref(), Some("Bus"));
    }

    #[test]
    fn test_add_succeeds_when_audit_log_is_unwritable() {
        let (_temp_dir, storage) = create_test_storage();
        fs::create_dir(storage.audit().path()).unwrap();
        let service = EntryService::with_clock(&storage, fixed_day);

        let expense = service.add_expense("Coffee", "10", "food").unwrap();

        assert_eq!(storage.expenses.load(), vec![expense]);
    }

    #[test]
    fn test_add_over_corrupt_file_is_audited_once() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(storage.expenses.path(), "garbage").unwrap();
        let service = EntryService::with_clock(&storage, fixed_day);

        service.add_expense("Coffee", "10", "Food").unwrap();
        service.add_expense("Bus", "40", "Travel").unwrap();

        let operations: Vec<Operation> = storage
            .audit()
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            operations,
            vec![Operation::Recover, Operation::Create, Operation::Create]
        );
    }

    #[test]
    fn test_non_canonical_date_makes_whole_file_unreadable() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(
            storage.expenses.path(),
            r#"[{"date":"2024-01-14","description":"Rent","amount":900.0,"category":"Bills"},
               {"date":"2024-01-15 09:30","description":"Tea","amount":5.0,"category":"Food"}]"#,
        )
        .unwrap();
        let service = EntryService::with_clock(&storage, fixed_day);

        service.add_expense("Bus", "40", "Travel").unwrap();

        let stored = storage.expenses.load();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "Bus");
        assert_eq!(
            storage.audit().read_all().unwrap()[0].operation,
            Operation::Recover
        );
    }

    #[test]
    fn test_add_over_corrupt_file_starts_fresh() {
        let (_temp_dir, storage) = create_test_storage();
        fs::write(storage.expenses.path(), "garbage").unwrap();
        let service = EntryService::with_clock(&storage, fixed_day);

        service.add_expense("Coffee", "10", "Food").unwrap();

        assert_eq!(storage.expenses.try_load().unwrap().len(), 1);
    }
}
