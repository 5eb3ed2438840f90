//! CLI command handler for peer transfers

use super::parse_amount;
use crate::display::{format_alert, format_receipt};
use crate::error::LedgerResult;
use crate::models::Account;
use crate::services::LedgerService;
use crate::storage::Directory;

/// Handle the transfer command
pub fn handle_transfer_command<D: Directory + ?Sized>(
    service: &LedgerService<'_, D>,
    account: &mut Account,
    recipient: &str,
    amount: &str,
) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let receipt = service.transfer(account, recipient, amount)?;

    println!(
        "{}",
        format_receipt(&receipt, &service.settings().currency_label)
    );
    if let Some(alert) = &receipt.sender_alert {
        println!("{}", format_alert(alert));
    }

    Ok(())
}
