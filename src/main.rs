use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use poupe::audit::AuditLogger;
use poupe::cli::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_export_command,
    handle_history_command, handle_list_command, handle_summary_command, handle_yearly_command,
    AddArgs, DeleteArgs, ExportArgs, HistoryArgs, MonthArgs,
};
use poupe::config::{PoupePaths, Settings};
use poupe::display::MoneyFormat;
use poupe::services::LedgerService;
use poupe::storage::open_ledger_store;

#[derive(Parser)]
#[command(
    name = "poupe",
    version,
    about = "Terminal-based monthly income and expense tracker",
    long_about = "Poupe records income and expense transactions per calendar month \
                  and shows monthly totals, savings rate, yearly trends and top \
                  categories, from the command line or an interactive interface."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Add a transaction
    Add(AddArgs),

    /// List the transactions of a month
    #[command(alias = "ls")]
    List(MonthArgs),

    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show totals, savings rate and insights for a month
    Summary(MonthArgs),

    /// Show income, expenses and balance for every month
    Yearly,

    /// Show the top categories of a month
    Categories(MonthArgs),

    /// Export a month's transactions to CSV
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PoupePaths::new()?;
    paths.ensure_directories()?;

    let tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    init_logger(&paths, level, tui_mode)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let settings = Settings::load_or_create(&paths)?;
    let money = MoneyFormat::from_settings(&settings);
    let audit = AuditLogger::new(paths.audit_log());

    let open_service = || -> Result<_> {
        let store = open_ledger_store(&paths, &settings)?;
        Ok(LedgerService::open(store, &settings, Some(audit.clone())))
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            poupe::tui::run_tui(open_service()?, money)?;
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&mut open_service()?, &money, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&open_service()?, &money, args.month)?;
        }
        Some(Commands::Delete(args)) => {
            handle_delete_command(&mut open_service()?, &money, args)?;
        }
        Some(Commands::Summary(args)) => {
            handle_summary_command(open_service()?.ledger(), &money, args)?;
        }
        Some(Commands::Yearly) => {
            handle_yearly_command(open_service()?.ledger(), &money)?;
        }
        Some(Commands::Categories(args)) => {
            handle_categories_command(open_service()?.ledger(), &money, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(open_service()?.ledger(), args)?;
        }
        Some(Commands::History(args)) => {
            handle_history_command(&audit, args)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Poupe Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Decimal separator: {}", settings.decimal_separator);
            println!("  Date format:       {}", settings.date_format);
            println!("  Storage key:       {}", settings.storage_key);
            println!("  Audit enabled:     {}", settings.audit_enabled);
        }
    }

    Ok(())
}

/// Install the tracing subscriber
///
/// `RUST_LOG` takes precedence over `level`. The TUI owns the terminal, so in
/// TUI mode events go to the log file instead of stderr.
fn init_logger(paths: &PoupePaths, level: LevelFilter, tui_mode: bool) -> Result<()> {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if tui_mode {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(paths.log_file())?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}
