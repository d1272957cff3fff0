//! Interactive menu shell
//!
//! Presents the numbered menu, reads the user's answers and dispatches to
//! the entry and reporting services. Input and output are generic so the
//! loop can be driven from tests.

mod menu;

pub use menu::MenuChoice;

use std::io::{BufRead, Write};

use crate::charts::{resolve_mode, NoCharts, TerminalChartRenderer, TextChartRenderer};
use crate::config::{ChartMode, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, ReportMonth};
use crate::reports::{EmptyResult, ReportOutcome};
use crate::services::{EntryService, ReportingService};
use crate::storage::Storage;

/// The menu loop
pub struct Shell<'a, R: BufRead, W: Write> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let keep_going = match MenuChoice::parse(&answer) {
                Some(MenuChoice::AddExpense) => self.add_expense()?,
                Some(MenuChoice::ViewAll) => self.view_expenses()?,
                Some(MenuChoice::Summary) => self.show_summary()?,
                Some(MenuChoice::MonthlyReport) => self.monthly_report()?,
                Some(MenuChoice::Exit) => {
                    self.say("Exiting... Have a great day!")?;
                    return Ok(());
                }
                None => {
                    self.say("Invalid choice! Please try again.")?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Give back the output, e.g. to inspect it in tests
    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        let mut menu = String::from("\n========== EXPENSE TRACKER ==========\n");
        for choice in MenuChoice::ALL {
            menu.push_str(&format!("{}. {}\n", choice.key(), choice.label()));
        }
        menu.push_str("=====================================");
        self.say(&menu)
    }

    /// Returns `false` when input ended mid-way
    fn add_expense(&mut self) -> ExpenseResult<bool> {
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(false);
        };

        let amount_prompt = format!("Enter amount ({}): ", self.settings.currency_symbol);
        let Some(amount) = self.prompt(&amount_prompt)? else {
            return Ok(false);
        };
        if Amount::parse(&amount).is_err() {
            self.say("Invalid amount!")?;
            return Ok(true);
        }

        let category_prompt = format!("Enter category ({}): ", self.settings.category_hint());
        let Some(category) = self.prompt(&category_prompt)? else {
            return Ok(false);
        };

        match EntryService::new(self.storage).add_expense(&description, &amount, &category) {
            Ok(_) => self.say("Expense added successfully!")?,
            Err(ExpenseError::InvalidAmount(_)) => self.say("Invalid amount!")?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn view_expenses(&mut self) -> ExpenseResult<bool> {
        let outcome = ReportingService::new(self.storage).list_all();
        let text = match outcome {
            ReportOutcome::Ready(listing) => {
                format!("\n{}", listing.format_terminal(&self.settings.currency_symbol))
            }
            ReportOutcome::Empty(reason) => reason.to_string(),
        };
        self.say(&text)?;
        Ok(true)
    }

    fn show_summary(&mut self) -> ExpenseResult<bool> {
        let settings = self.settings;
        let service = ReportingService::new(self.storage);
        let symbol = settings.currency_symbol.as_str();

        let outcome = match resolve_mode(settings.chart_mode) {
            ChartMode::Terminal => {
                service.summarize_by_category(&mut TerminalChartRenderer::new(symbol))?
            }
            ChartMode::Text => {
                let mut charts =
                    TextChartRenderer::new(&mut self.output, settings.chart_width, symbol);
                service.summarize_by_category(&mut charts)?
            }
            ChartMode::Off | ChartMode::Auto => service.summarize_by_category(&mut NoCharts)?,
        };

        let text = match outcome {
            ReportOutcome::Ready(summary) => format!("\n{}", summary.format_terminal(symbol)),
            ReportOutcome::Empty(_) => "No data to analyze!".to_string(),
        };
        self.say(&text)?;
        Ok(true)
    }

    fn monthly_report(&mut self) -> ExpenseResult<bool> {
        let service = ReportingService::new(self.storage);
        if !service.has_expenses() {
            self.say(&EmptyResult::NoExpenses.to_string())?;
            return Ok(true);
        }

        let Some(month) = self.prompt("Enter month (MM): ")? else {
            return Ok(false);
        };
        let Some(year) = self.prompt("Enter year (YYYY): ")? else {
            return Ok(false);
        };

        let month = match ReportMonth::from_parts(&month, &year) {
            Ok(month) => month,
            Err(e) => {
                self.say(&e.to_string())?;
                return Ok(true);
            }
        };

        let text = match service.monthly_report(month) {
            ReportOutcome::Ready(report) => {
                format!("\n{}", report.format_terminal(&self.settings.currency_symbol))
            }
            ReportOutcome::Empty(reason) => reason.to_string(),
        };
        self.say(&text)?;
        Ok(true)
    }

    /// Print a prompt and read one line; `None` when input has ended
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn text_settings() -> Settings {
        Settings {
            chart_mode: ChartMode::Text,
            ..Settings::default()
        }
    }

    fn run_shell(storage: &Storage, settings: &Settings, input: &str) -> String {
        let mut shell = Shell::new(storage, settings, Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_exit() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "5\n");

        assert!(output.contains("========== EXPENSE TRACKER =========="));
        assert!(output.contains("3. Show Summary (Charts)"));
        assert!(output.ends_with("Exiting... Have a great day!\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "");
        assert!(output.ends_with("Enter your choice: "));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "9\n5\n");

        assert!(output.contains("Invalid choice! Please try again."));
        assert_eq!(output.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn test_add_and_view() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(
            &storage,
            &text_settings(),
            "1\nCoffee\n150.50\nfood\n1\nBus\n40\nTravel\n2\n5\n",
        );

        assert_eq!(output.matches("Expense added successfully!").count(), 2);
        assert!(output.contains("Enter category (Food/Travel/Bills/Shopping/Other): "));
        assert!(output.contains("====== Expense List ======"));
        assert!(output.contains("₹190.50"));

        let coffee = output.find("Coffee               Food").unwrap();
        let bus = output.find("Bus                  Travel").unwrap();
        assert!(coffee < bus);
    }

    #[test]
    fn test_invalid_amount_skips_category_and_store() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "1\nTea\nabc\n5\n");

        assert!(output.contains("Invalid amount!"));
        assert!(!output.contains("Enter category"));
        assert!(!storage.expenses.exists());
    }

    #[test]
    fn test_view_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "2\n5\n");
        assert!(output.contains("No expenses recorded yet!"));
    }

    #[test]
    fn test_summary_with_text_charts() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(
            &storage,
            &text_settings(),
            "1\nCoffee\n150\nfood\n1\nBus\n50\nTravel\n3\n5\n",
        );

        assert!(output.contains("Expense by Category"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("====== Expense Summary ======"));
        assert!(output.contains("Total: ₹200.00"));
    }

    #[test]
    fn test_summary_without_charts() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            chart_mode: ChartMode::Off,
            ..Settings::default()
        };
        let output = run_shell(&storage, &settings, "1\nCoffee\n150\nfood\n3\n5\n");

        assert!(!output.contains("Expense by Category"));
        assert!(output.contains("Food           : ₹150.00"));
    }

    #[test]
    fn test_summary_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "3\n5\n");
        assert!(output.contains("No data to analyze!"));
    }

    #[test]
    fn test_monthly_report_skips_prompt_when_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "4\n5\n");

        assert!(output.contains("No expenses recorded yet!"));
        assert!(!output.contains("Enter month"));
    }

    #[test]
    fn test_monthly_report_for_other_month() {
        let (_temp_dir, storage) = create_test_storage();
        let today = chrono::Local::now().date_naive();
        let other_year = ReportMonth::of(today).year() - 1;

        let input = format!("1\nCoffee\n10\nFood\n4\n1\n{}\n5\n", other_year);
        let output = run_shell(&storage, &text_settings(), &input);

        assert!(output.contains("No records for this month!"));
    }

    #[test]
    fn test_monthly_report_for_current_month() {
        let (_temp_dir, storage) = create_test_storage();
        let current = ReportMonth::current();

        let input = format!(
            "1\nCoffee\n10\nFood\n4\n{}\n{}\n5\n",
            current.month(),
            current.year()
        );
        let output = run_shell(&storage, &text_settings(), &input);

        assert!(output.contains(&format!("====== Report for {} ======", current.label())));
        assert!(output.contains("| Coffee | ₹10.00 | Food"));
    }

    #[test]
    fn test_monthly_report_bad_month() {
        let (_temp_dir, storage) = create_test_storage();
        let output = run_shell(&storage, &text_settings(), "1\nCoffee\n10\nFood\n4\n13\n2024\n5\n");

        assert!(output.contains("month must be between 1 and 12"));
        assert!(output.ends_with("Exiting... Have a great day!\n"));
    }
}
