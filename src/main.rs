use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_audit_command, handle_export_command, handle_list_command,
    handle_monthly_command, handle_summary_command,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::models::ReportMonth;
use expense_tracker::shell::Shell;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker for the terminal",
    long_about = "Records dated, categorized expenses in a local JSON file and \
                  reports on them: a full listing, per-category totals with \
                  charts, and monthly statements. Run without a command for \
                  the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json, config.json and audit.log
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    #[command(alias = "menu")]
    Shell,

    /// Record an expense dated today
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. 150.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category; the first letter is capitalized
        #[arg(default_value = "Other")]
        category: String,
    },

    /// List all expenses
    #[command(alias = "view")]
    List,

    /// Show totals per category
    Summary {
        /// Skip the charts and only print the table
        #[arg(long)]
        no_charts: bool,
    },

    /// Show the expenses of one month
    Monthly {
        /// Month (1-12)
        month: String,
        /// Four-digit year
        year: String,
    },

    /// Export expenses as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only export this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<ReportMonth>,

        /// Export per-category totals instead of expenses
        #[arg(long, conflicts_with = "month")]
        summary: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to config.json
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            Shell::new(&storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Add {
            description,
            amount,
            category,
        } => {
            handle_add_command(&storage, &settings, &description, &amount, &category)?;
        }
        Commands::List => handle_list_command(&storage, &settings)?,
        Commands::Summary { no_charts } => handle_summary_command(&storage, &settings, no_charts)?,
        Commands::Monthly { month, year } => {
            handle_monthly_command(&storage, &settings, &month, &year)?;
        }
        Commands::Export {
            output,
            month,
            summary,
        } => handle_export_command(&storage, output, month, summary)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Categories:      {}", settings.category_hint());
            println!("  Chart mode:      {:?}", settings.chart_mode);
            println!("  Chart width:     {}", settings.chart_width);
        }
    }

    Ok(())
}
