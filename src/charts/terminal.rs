//! Full-screen terminal charts
//!
//! Shows the bar chart and the pie chart side by side in the alternate
//! screen and waits for a key press before handing the terminal back.

use std::f64::consts::TAU;
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph,
    },
    Frame, Terminal,
};

use crate::display::format_percentage;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CategoryTotals;

use super::ChartRenderer;

type ChartTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Slice colors, reused in order when there are more categories
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightGreen,
];

/// Renders charts in the alternate screen until a key is pressed
#[derive(Debug, Clone)]
pub struct TerminalChartRenderer {
    currency_symbol: String,
}

impl TerminalChartRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(&mut self, totals: &CategoryTotals) -> ExpenseResult<()> {
        let mut terminal = init_terminal()?;
        let shown = show_until_key(&mut terminal, totals, &self.currency_symbol);
        restore_terminal()?;
        shown
    }
}

fn tui_error(e: io::Error) -> ExpenseError {
    ExpenseError::Tui(e.to_string())
}

/// Enter raw mode and the alternate screen
fn init_terminal() -> ExpenseResult<ChartTerminal> {
    // Restore the terminal before the panic message is printed
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode().map_err(tui_error)?;
    let mut stdout = io::stdout();
    undo_on_error(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })
    .map_err(tui_error)?;

    undo_on_error(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = restore_terminal();
    })
    .map_err(tui_error)
}

/// Pass `result` through, running `undo` first when it is an error
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn restore_terminal() -> ExpenseResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

fn show_until_key(
    terminal: &mut ChartTerminal,
    totals: &CategoryTotals,
    currency_symbol: &str,
) -> ExpenseResult<()> {
    loop {
        terminal
            .draw(|frame| draw_charts(frame, totals, currency_symbol))
            .map_err(tui_error)?;

        // Resize events fall through to a redraw
        if let Event::Key(key) = event::read().map_err(tui_error)? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn draw_charts(frame: &mut Frame, totals: &CategoryTotals, currency_symbol: &str) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(vertical[0]);

    render_bar_chart(frame, horizontal[0], totals, currency_symbol);
    render_pie_chart(frame, horizontal[1], totals);

    let hint = Paragraph::new(Span::styled(
        " Press any key to close ",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hint, vertical[1]);
}

fn render_bar_chart(frame: &mut Frame, area: Rect, totals: &CategoryTotals, currency_symbol: &str) {
    let bars: Vec<Bar> = totals
        .iter()
        .map(|(category, amount)| {
            // Bars are scaled in hundredths; only positive subtotals get height
            let height = (amount.value().max(0.0) * 100.0).round() as u64;
            Bar::default()
                .label(Line::from(category.to_string()))
                .value(height)
                .text_value(amount.format_with_symbol(currency_symbol))
        })
        .collect();

    let count = bars.len().max(1) as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 12);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Expense by Category ")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

fn render_pie_chart(frame: &mut Frame, area: Rect, totals: &CategoryTotals) {
    let legend_height = (totals.len() as u16).saturating_add(2);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(legend_height)])
        .split(area);

    let slices = pie_slices(totals);

    // Terminal cells are about twice as tall as they are wide
    let canvas_area = sections[0];
    let cols = canvas_area.width.saturating_sub(2).max(1) as f64;
    let rows = canvas_area.height.saturating_sub(2).max(1) as f64;
    let x_extent = cols / (2.0 * rows);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Expense Distribution ")
                .borders(Borders::ALL),
        )
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (i, points) in slices.iter().enumerate() {
                ctx.draw(&Points {
                    coords: points,
                    color: PALETTE[i % PALETTE.len()],
                });
            }
        });
    frame.render_widget(canvas, canvas_area);

    let legend: Vec<Line> = totals
        .shares()
        .into_iter()
        .enumerate()
        .map(|(i, (category, pct))| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(PALETTE[i % PALETTE.len()])),
                Span::raw(format!("{} {}", category, format_percentage(pct))),
            ])
        })
        .collect();

    let legend = Paragraph::new(legend).block(Block::default().borders(Borders::ALL));
    frame.render_widget(legend, sections[1]);
}

/// Points filling each slice of a unit pie, one vector per category
///
/// Categories with a non-positive share get no points.
fn pie_slices(totals: &CategoryTotals) -> Vec<Vec<(f64, f64)>> {
    const RADIUS_STEPS: usize = 40;
    const ANGLE_STEP: f64 = 0.01;

    let mut start = 0.0;
    totals
        .shares()
        .into_iter()
        .map(|(_, pct)| {
            let mut points = Vec::new();
            if pct <= 0.0 {
                return points;
            }

            let sweep = pct / 100.0 * TAU;
            let mut angle = start;
            while angle < start + sweep {
                for step in 1..=RADIUS_STEPS {
                    let r = step as f64 / RADIUS_STEPS as f64;
                    points.push((r * angle.cos(), r * angle.sin()));
                }
                angle += ANGLE_STEP;
            }

            start += sweep;
            points
        })
        .collect()
}
