//! CLI commands for reports
//!
//! Category summary (optionally with charts) and the monthly report.

use std::io;

use crate::charts::{resolve_mode, NoCharts, TerminalChartRenderer, TextChartRenderer};
use crate::config::{ChartMode, Settings};
use crate::error::ExpenseResult;
use crate::models::ReportMonth;
use crate::reports::ReportOutcome;
use crate::services::ReportingService;
use crate::storage::Storage;

/// Print per-category subtotals, drawing charts first unless disabled
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    no_charts: bool,
) -> ExpenseResult<()> {
    let service = ReportingService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    let mode = if no_charts {
        ChartMode::Off
    } else {
        resolve_mode(settings.chart_mode)
    };

    let outcome = match mode {
        ChartMode::Terminal => {
            service.summarize_by_category(&mut TerminalChartRenderer::new(symbol))?
        }
        ChartMode::Text => {
            let mut charts = TextChartRenderer::new(io::stdout(), settings.chart_width, symbol);
            service.summarize_by_category(&mut charts)?
        }
        ChartMode::Off | ChartMode::Auto => service.summarize_by_category(&mut NoCharts)?,
    };

    match outcome {
        ReportOutcome::Ready(summary) => print!("{}", summary.format_terminal(symbol)),
        ReportOutcome::Empty(_) => println!("No data to analyze!"),
    }

    Ok(())
}

/// Print the expenses of one month
pub fn handle_monthly_command(
    storage: &Storage,
    settings: &Settings,
    month: &str,
    year: &str,
) -> ExpenseResult<()> {
    let month = ReportMonth::from_parts(month, year)?;

    match ReportingService::new(storage).monthly_report(month) {
        ReportOutcome::Ready(report) => {
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
        ReportOutcome::Empty(reason) => println!("{}", reason),
    }

    Ok(())
}
