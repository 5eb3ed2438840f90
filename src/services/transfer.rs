//! Peer-to-peer transfers
//!
//! A transfer records an expense on the sender and an income on the
//! recipient. Both legs are staged on copies and committed together, so
//! either both are recorded or neither is.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::alert::LimitAlert;
use super::{require_positive, LedgerService};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Operation};
use crate::storage::Directory;

/// Label given to both legs of a transfer
pub const TRANSFER_LABEL: &str = "Transfer";

/// Result of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub amount: f64,
    pub recipient: String,
    pub date: NaiveDate,
    /// Limit alert raised by the sender's expense leg
    pub sender_alert: Option<LimitAlert>,
    /// Limit alert raised by the recipient's income leg
    pub recipient_alert: Option<LimitAlert>,
}

impl<D: Directory + ?Sized> LedgerService<'_, D> {
    /// Move `amount` from the sender to the account registered as `recipient_login`
    pub fn transfer(
        &self,
        sender: &mut Account,
        recipient_login: &str,
        amount: f64,
    ) -> LedgerResult<TransferReceipt> {
        require_positive(amount, "Transfer amount")?;
        let recipient_login = recipient_login.trim();

        let _guard = self.lock()?;
        let mut staged_sender = self.current(sender)?;

        let balance = staged_sender.balance();
        if amount > balance {
            return Err(LedgerError::Validation(format!(
                "Insufficient funds: balance {}, requested {}",
                balance, amount
            )));
        }

        if recipient_login == staged_sender.login() {
            return Err(LedgerError::Validation(
                "Cannot transfer to the same account".into(),
            ));
        }

        let mut staged_recipient = self
            .directory
            .get(recipient_login)?
            .ok_or_else(|| LedgerError::account_not_found(recipient_login))?;

        let date = Local::now().date_naive();
        let outgoing = Operation::expense(
            format!("transfer {}", recipient_login),
            amount,
            TRANSFER_LABEL,
            date,
        );
        let incoming = Operation::income(
            format!("transfer from {}", staged_sender.login()),
            amount,
            TRANSFER_LABEL,
            date,
        );

        staged_sender.push_operation(outgoing.clone());
        staged_recipient.push_operation(incoming.clone());

        self.commit(&[&staged_sender, &staged_recipient])?;
        *sender = staged_sender;

        info!(
            from = sender.login(),
            to = recipient_login,
            amount,
            "transfer committed"
        );

        let sender_alert = self.evaluate_limit(sender, &outgoing);
        let recipient_alert = self.evaluate_limit(&staged_recipient, &incoming);
        for alert in sender_alert.iter().chain(recipient_alert.iter()) {
            warn!("{}", alert);
        }

        Ok(TransferReceipt {
            amount,
            recipient: recipient_login.to_string(),
            date,
            sender_alert,
            recipient_alert,
        })
    }
}
