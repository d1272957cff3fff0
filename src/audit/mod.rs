//! Audit logging system for the expense tracker
//!
//! Records every created expense, and every time an unreadable expense file
//! was replaced by an empty ledger, in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information and the created value or a note.
//! - `AuditLogger`: writes entries to the audit log file in line-delimited
//!   JSON (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     "2024-01-15#0",
//!     Some("Coffee".to_string()),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
