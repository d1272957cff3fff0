//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list to expenses.json. The file
//! holds a bare JSON array of expense objects.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
///
/// There is no locking; one process is assumed to own the file.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses, reporting unreadable content
    ///
    /// A missing file is an empty list. Content that does not parse yields
    /// [`ExpenseError::MalformedStore`].
    pub fn try_load(&self) -> Result<Vec<Expense>, ExpenseError> {
        read_json(&self.path)
    }

    /// Load expenses, treating any failure as an empty list
    pub fn load(&self) -> Vec<Expense> {
        self.try_load().unwrap_or_default()
    }

    /// Overwrite the file with the full expense list
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, expenses)
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
