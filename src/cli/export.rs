//! CLI command for CSV export
//!
//! Writes the expense list, one month of it, or the category summary as CSV
//! to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::charts::NoCharts;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ReportMonth;
use crate::reports::ReportOutcome;
use crate::services::ReportingService;
use crate::storage::Storage;

/// Handle the export command
///
/// Nothing is written, and no file is created, when there is nothing to
/// export; the reason goes to stderr instead.
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    month: Option<ReportMonth>,
    summary: bool,
) -> ExpenseResult<()> {
    let service = ReportingService::new(storage);
    let output = output.as_deref();

    let exported = if summary {
        match service.summarize_by_category(&mut NoCharts)? {
            ReportOutcome::Ready(report) => report.export_csv(open_output(output)?).map(|_| true),
            ReportOutcome::Empty(reason) => skip(reason),
        }
    } else if let Some(month) = month {
        match service.monthly_report(month) {
            ReportOutcome::Ready(report) => report.export_csv(open_output(output)?).map(|_| true),
            ReportOutcome::Empty(reason) => skip(reason),
        }
    } else {
        match service.list_all() {
            ReportOutcome::Ready(listing) => {
                listing.export_csv(open_output(output)?).map(|_| true)
            }
            ReportOutcome::Empty(reason) => skip(reason),
        }
    }?;

    // Stdout carries the CSV itself, so only confirm file exports
    if exported {
        if let Some(path) = output {
            println!("Exported to: {}", path.display());
        }
    }

    Ok(())
}

fn skip(reason: impl std::fmt::Display) -> ExpenseResult<bool> {
    eprintln!("{}", reason);
    Ok(false)
}

fn open_output(output: Option<&Path>) -> ExpenseResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
