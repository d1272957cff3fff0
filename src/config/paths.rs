//! Path management for the expense tracker
//!
//! Every file the tracker touches lives in one base directory.
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag or the
//!    `EXPENSE_TRACKER_DIR` environment variable, both handled by clap)
//! 2. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Name of the expense ledger file
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the ledger, settings and audit log
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from an optional override
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the current directory
    /// cannot be determined.
    pub fn new(override_dir: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}
