//! Plain-text charts
//!
//! Writes a horizontal bar chart of subtotals followed by the share of each
//! category, for output that is not an interactive terminal.

use std::io::Write;

use crate::display::{format_bar, format_percentage, label_width};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CategoryTotals;

use super::ChartRenderer;

/// Renders charts as text lines
pub struct TextChartRenderer<W: Write> {
    writer: W,
    width: usize,
    currency_symbol: String,
}

impl<W: Write> TextChartRenderer<W> {
    /// Create a renderer writing bars up to `width` characters long
    pub fn new(writer: W, width: usize, currency_symbol: impl Into<String>) -> Self {
        Self {
            writer,
            width: width.max(1),
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_charts(&mut self, totals: &CategoryTotals) -> std::io::Result<()> {
        let label_w = label_width(totals.labels(), 8);
        let max = totals.max().value();

        writeln!(self.writer)?;
        writeln!(self.writer, "Expense by Category")?;
        for (category, amount) in totals.iter() {
            writeln!(
                self.writer,
                "{:<label_w$} {} {}",
                category.as_str(),
                format_bar(amount.value(), max, self.width),
                amount.format_with_symbol(&self.currency_symbol),
                label_w = label_w,
            )?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "Expense Distribution")?;
        for (category, pct) in totals.shares() {
            writeln!(
                self.writer,
                "{:<label_w$} {} {:>6}",
                category.as_str(),
                format_bar(pct, 100.0, self.width),
                format_percentage(pct),
                label_w = label_w,
            )?;
        }
        writeln!(self.writer)?;

        self.writer.flush()
    }
}

impl<W: Write> ChartRenderer for TextChartRenderer<W> {
    fn render(&mut self, totals: &CategoryTotals) -> ExpenseResult<()> {
        self.write_charts(totals)
            .map_err(|e| ExpenseError::Io(format!("Failed to write chart: {}", e)))
    }
}
