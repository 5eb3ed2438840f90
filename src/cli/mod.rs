//! CLI command handlers
//!
//! This module bridges clap argument parsing with the ledger service.
//! Handlers print results and alerts; the service itself never prints.

pub mod budget;
pub mod operation;
pub mod report;
pub mod transfer;

pub use budget::{handle_budget_command, BudgetCommands};
pub use operation::{handle_entry_command, handle_ops_command, EntryCommands, OpsCommands};
pub use report::handle_report_command;
pub use transfer::handle_transfer_command;

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};

/// Parse a user-entered amount such as "100" or "12.50"
///
/// Sign checks are left to the service so every surface reports them the same way.
pub fn parse_amount(input: &str) -> LedgerResult<f64> {
    input.trim().parse::<f64>().map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '100' or '12.50'",
            input
        ))
    })
}

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub fn parse_date(input: Option<&str>) -> LedgerResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
