//! Expense Tracker - personal expense tracking in the terminal
//!
//! This library provides the core functionality for the `expense` command:
//! recording dated, categorized expenses in a local JSON file and reporting
//! on them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, expenses, the ledger)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Entry (write path) and reporting (read path)
//! - `reports`: Report values with terminal and CSV output
//! - `display`: Terminal formatting helpers
//! - `charts`: Chart renderers handed to the category summary
//! - `shell`: The interactive menu
//! - `cli`: Handlers for the command line subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::services::EntryService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new(None)?;
//! let storage = Storage::new(paths)?;
//! EntryService::new(&storage).add_expense("Coffee", "150.50", "food")?;
//! ```

pub mod audit;
pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::ExpenseError;
