//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod report;

pub use audit::handle_audit_command;
pub use expense::{handle_add_command, handle_list_command};
pub use export::handle_export_command;
pub use report::{handle_monthly_command, handle_summary_command};
