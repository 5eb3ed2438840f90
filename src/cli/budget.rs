//! Budget CLI commands
//!
//! Add and edit monthly category limits, list them, and show planned
//! versus actual figures for a month.

use clap::Subcommand;

use super::parse_amount;
use crate::display::{format_budgets, format_month_summary};
use crate::error::LedgerResult;
use crate::models::{Account, BudgetMonth, OperationKind};
use crate::services::LedgerService;
use crate::storage::Directory;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a limit for a category in a month
    Add {
        /// Category name
        category: String,
        /// Limit amount
        #[arg(allow_hyphen_values = true)]
        limit: String,
        /// Budget kind (income or expense)
        #[arg(short, long, default_value = "expense")]
        kind: OperationKind,
        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<BudgetMonth>,
    },

    /// Change the limit of an existing budget
    Edit {
        /// Category name
        category: String,
        /// New limit amount
        #[arg(allow_hyphen_values = true)]
        limit: String,
        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<BudgetMonth>,
    },

    /// List all budgets
    List,

    /// Show planned versus actual for a month
    Actuals {
        /// Budget month (YYYY-MM, defaults to the current month)
        month: Option<BudgetMonth>,
    },
}

/// Handle a budget command
pub fn handle_budget_command<D: Directory + ?Sized>(
    service: &LedgerService<'_, D>,
    account: &mut Account,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Add {
            category,
            limit,
            kind,
            month,
        } => {
            let limit = parse_amount(&limit)?;
            let month = month.unwrap_or_else(BudgetMonth::current);
            service.add_budget(account, kind, &category, month, limit)?;
            println!(
                "Budget set: {} '{}' for {}: {:.2}",
                kind.as_str().to_lowercase(),
                category.trim(),
                month,
                limit
            );
        }

        BudgetCommands::Edit {
            category,
            limit,
            month,
        } => {
            let limit = parse_amount(&limit)?;
            let month = month.unwrap_or_else(BudgetMonth::current);
            service.edit_budget(account, &category, month, limit)?;
            println!(
                "Budget updated: '{}' for {} is now {:.2}",
                category.trim(),
                month,
                limit
            );
        }

        BudgetCommands::List => {
            println!("{}", format_budgets(service.list_budgets(account)));
        }

        BudgetCommands::Actuals { month } => {
            let month = month.unwrap_or_else(BudgetMonth::current);
            let summary = service.month_summary(account, month);
            print!(
                "{}",
                format_month_summary(&summary, &service.settings().currency_label)
            );
        }
    }

    Ok(())
}
