//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit log. Every
//! operation loads the whole ledger and, when it changes it, writes the whole
//! ledger back.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Ledger;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseStore::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the full ledger
    ///
    /// Never fails and never writes: a missing file is an empty ledger, and
    /// so is an unreadable one.
    pub fn load_ledger(&self) -> Ledger {
        self.try_load_ledger().unwrap_or_default()
    }

    /// Load the ledger that is about to be modified and saved back
    ///
    /// Like [`Storage::load_ledger`], but an unreadable file is recorded in
    /// the audit log first, since saving will replace it.
    pub fn load_ledger_for_update(&self) -> Ledger {
        match self.try_load_ledger() {
            Ok(ledger) => ledger,
            Err(err) => {
                let entry = AuditEntry::recover(
                    EntityType::Store,
                    self.expenses.path().display().to_string(),
                    err.to_string(),
                );
                // The empty ledger is returned whether or not this is recorded
                let _ = self.audit.log(&entry);
                Ledger::new()
            }
        }
    }

    /// Load the full ledger, reporting unreadable data instead of hiding it
    pub fn try_load_ledger(&self) -> ExpenseResult<Ledger> {
        self.expenses.try_load().map(Ledger::from_expenses)
    }

    /// Overwrite the expense file with the full ledger
    pub fn save_ledger(&self, ledger: &Ledger) -> ExpenseResult<()> {
        self.expenses.save(ledger.expenses())
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> ExpenseResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}
