//! Category charts
//!
//! Chart drawing is an injected capability: the summary hands the
//! category subtotals to a [`ChartRenderer`] and does nothing else with the
//! result. Two renderers exist, a plain-text one and a full-screen terminal
//! one built on ratatui.

pub mod terminal;
pub mod text;

pub use terminal::TerminalChartRenderer;
pub use text::TextChartRenderer;

use std::io::IsTerminal;

use crate::config::ChartMode;
use crate::error::ExpenseResult;
use crate::models::CategoryTotals;

/// Draws the bar chart and pie chart for a set of category subtotals
pub trait ChartRenderer {
    fn render(&mut self, totals: &CategoryTotals) -> ExpenseResult<()>;
}

impl<F> ChartRenderer for F
where
    F: FnMut(&CategoryTotals) -> ExpenseResult<()>,
{
    fn render(&mut self, totals: &CategoryTotals) -> ExpenseResult<()> {
        self(totals)
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCharts;

impl ChartRenderer for NoCharts {
    fn render(&mut self, _totals: &CategoryTotals) -> ExpenseResult<()> {
        Ok(())
    }
}

/// Resolve `auto` to a concrete mode for the current stdout
pub fn resolve_mode(mode: ChartMode) -> ChartMode {
    match mode {
        ChartMode::Auto if std::io::stdout().is_terminal() => ChartMode::Terminal,
        ChartMode::Auto => ChartMode::Text,
        other => other,
    }
}
