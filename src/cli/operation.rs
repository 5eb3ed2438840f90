//! Income, expense and operation listing commands

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::display::{format_alert, format_operations};
use crate::error::LedgerResult;
use crate::models::{Account, BudgetMonth, Operation, OperationKind};
use crate::services::LedgerService;
use crate::storage::Directory;

/// Subcommands shared by `income` and `expense`
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new entry
    Add {
        /// Category (e.g. "salary", "food")
        category: String,
        /// Amount (e.g. "100" or "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Free-text label
        #[arg(short, long, default_value = "")]
        label: String,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Operation listing subcommands
#[derive(Subcommand)]
pub enum OpsCommands {
    /// List recorded operations
    List {
        /// Only show operations in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<BudgetMonth>,
        /// Only show income or expense
        #[arg(short, long)]
        kind: Option<OperationKind>,
    },
}

/// Handle `income add` / `expense add`
pub fn handle_entry_command<D: Directory + ?Sized>(
    service: &LedgerService<'_, D>,
    account: &mut Account,
    kind: OperationKind,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    match cmd {
        EntryCommands::Add {
            category,
            amount,
            label,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref())?;
            let operation = Operation::new(kind, category.trim(), amount, label, date);

            let alert = service.add_operation(account, operation)?;
            println!(
                "Recorded {} of {:.2} {} in '{}'",
                kind.as_str().to_lowercase(),
                amount,
                service.settings().currency_label,
                category.trim()
            );
            if let Some(alert) = alert {
                println!("{}", format_alert(&alert));
            }
        }
    }

    Ok(())
}

/// Handle `ops list`
pub fn handle_ops_command<D: Directory + ?Sized>(
    service: &LedgerService<'_, D>,
    account: &Account,
    cmd: OpsCommands,
) -> LedgerResult<()> {
    match cmd {
        OpsCommands::List { month, kind } => {
            let operations: Vec<Operation> = service
                .list_operations(account)
                .iter()
                .filter(|op| month.map_or(true, |m| m.contains(op.date())))
                .filter(|op| kind.map_or(true, |k| op.kind() == k))
                .cloned()
                .collect();

            println!(
                "{}",
                format_operations(&operations, &service.settings().date_format)
            );
        }
    }

    Ok(())
}
