//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the reports and the text charts.

/// Format a percentage the way chart labels show it, e.g. `79.0%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a banner title, e.g. `====== Expense List ======`
pub fn format_title(title: &str) -> String {
    format!("====== {} ======", title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Width of the widest label, at least `min`
pub fn label_width<'a, I>(labels: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(min)
}
