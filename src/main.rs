use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketbook::cli::{
    handle_budget_command, handle_entry_command, handle_ops_command, handle_report_command,
    handle_transfer_command, BudgetCommands, EntryCommands, OpsCommands,
};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::crypto::SecretString;
use pocketbook::display::format_balance;
use pocketbook::models::OperationKind;
use pocketbook::services::LedgerService;
use pocketbook::storage::open_directory;

/// Environment variable holding the log filter
const LOG_ENV: &str = "POCKETBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Personal wallet ledger with monthly budgets and transfers",
    long_about = "Pocketbook records income and expenses per category, tracks \
                  monthly budget limits and warns as spending approaches them, \
                  moves money between users and exports account reports."
)]
struct Cli {
    /// Account login (registered on first use)
    #[arg(long, global = true, env = "POCKETBOOK_LOGIN")]
    login: Option<String>,

    /// Account password (prompted when absent)
    #[arg(long, global = true, env = "POCKETBOOK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Show informational log output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current balance
    Balance,

    /// Record income
    #[command(subcommand)]
    Income(EntryCommands),

    /// Record an expense
    #[command(subcommand)]
    Expense(EntryCommands),

    /// Inspect recorded operations
    #[command(subcommand, alias = "operations")]
    Ops(OpsCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Send money to another user
    Transfer {
        /// Recipient login
        recipient: String,
        /// Amount to send
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Export an account report
    Report {
        /// Output file (defaults to <reports dir>/<login>_report.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        write: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt_login() -> Result<String> {
    print!("Login: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read login")?;
    Ok(line.trim().to_string())
}

fn resolve_credentials(login: Option<String>, password: Option<String>) -> Result<(String, SecretString)> {
    let login = match login {
        Some(login) => login,
        None => prompt_login()?,
    };
    if login.trim().is_empty() {
        bail!("A login is required (use --login or POCKETBOOK_LOGIN)");
    }

    let secret = match password {
        Some(password) => SecretString::new(password),
        None => SecretString::new(
            rpassword::prompt_password(format!("Password for {}: ", login.trim()))
                .context("Failed to read password")?,
        ),
    };

    Ok((login, secret))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Commands::Config { write } = cli.command {
        if write {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
        }
        println!("Pocketbook Configuration");
        println!("========================");
        println!("Base directory:    {}", paths.base_dir().display());
        println!("Accounts file:     {}", paths.accounts_file().display());
        println!("Reports directory: {}", paths.reports_dir().display());
        println!();
        println!("Settings:");
        println!("  Approaching alert: {}%", settings.alerts.approaching_percent);
        println!("  Exceeded alert:    {}%", settings.alerts.exceeded_percent);
        println!("  Currency label:    {}", settings.currency_label);
        println!("  Date format:       {}", settings.date_format);
        return Ok(());
    }

    let directory = open_directory(&paths)?;
    let service = LedgerService::new(&directory, &settings);

    let (login, secret) = resolve_credentials(cli.login, cli.password)?;
    let mut account = service.authenticate(&login, &secret)?;

    match cli.command {
        Commands::Balance => {
            let balance = service.balance(&account)?;
            println!("{}", format_balance(balance, &settings.currency_label));
        }
        Commands::Income(cmd) => {
            handle_entry_command(&service, &mut account, OperationKind::Income, cmd)?;
        }
        Commands::Expense(cmd) => {
            handle_entry_command(&service, &mut account, OperationKind::Expense, cmd)?;
        }
        Commands::Ops(cmd) => handle_ops_command(&service, &account, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&service, &mut account, cmd)?,
        Commands::Transfer { recipient, amount } => {
            handle_transfer_command(&service, &mut account, &recipient, &amount)?;
        }
        Commands::Report { output } => {
            handle_report_command(&service, &account, &paths, output)?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}
