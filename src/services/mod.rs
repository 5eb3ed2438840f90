//! Service layer for Pocketbook
//!
//! [`LedgerService`] is the only component with business rules. It
//! validates input, evaluates budget limits, performs transfers and builds
//! reports, reading and writing accounts through a [`Directory`].
//!
//! Mutating operations take the caller's `&mut Account` session handle.
//! The service re-reads the committed record from the directory, applies
//! the change to a staged copy, commits it, and only then refreshes the
//! caller's handle. A failed commit restores the directory's previous
//! records and leaves the handle untouched.

pub mod alert;
pub mod auth;
pub mod budget;
pub mod operation;
pub mod report;
pub mod transfer;

pub use alert::{AlertLevel, LimitAlert};
pub use budget::{BudgetLine, MonthSummary};
pub use transfer::TransferReceipt;

use std::sync::{Mutex, MutexGuard};

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;
use crate::storage::Directory;

/// Ledger rules over a directory of accounts
pub struct LedgerService<'a, D: Directory + ?Sized> {
    directory: &'a D,
    settings: &'a Settings,
    /// Serialises read-modify-write sequences (balance check + append)
    write_lock: Mutex<()>,
}

impl<'a, D: Directory + ?Sized> LedgerService<'a, D> {
    /// Create a new ledger service
    pub fn new(directory: &'a D, settings: &'a Settings) -> Self {
        Self {
            directory,
            settings,
            write_lock: Mutex::new(()),
        }
    }

    pub fn directory(&self) -> &D {
        self.directory
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    fn lock(&self) -> LedgerResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire ledger lock: {}", e)))
    }

    /// The committed record for a session handle, falling back to the handle itself
    fn current(&self, account: &Account) -> LedgerResult<Account> {
        Ok(self
            .directory
            .get(account.login())?
            .unwrap_or_else(|| account.clone()))
    }

    /// Write staged accounts and flush once, restoring previous records on failure
    ///
    /// Accounts that did not exist before the commit are removed again, so
    /// a failed registration leaves no trace in the directory.
    fn commit(&self, staged: &[&Account]) -> LedgerResult<()> {
        let mut previous = Vec::with_capacity(staged.len());
        for account in staged {
            previous.push((account.login(), self.directory.get(account.login())?));
        }

        let result = staged
            .iter()
            .try_for_each(|account| self.directory.put((*account).clone()))
            .and_then(|()| self.directory.flush());

        if let Err(err) = result {
            tracing::warn!(error = %err, "commit failed, restoring previous records");
            for (login, before) in previous {
                let restored = match before {
                    Some(before) => self.directory.put(before),
                    None => self.directory.remove(login),
                };
                if let Err(restore_err) = restored {
                    tracing::error!(login, error = %restore_err, "failed to restore account record");
                }
            }
            return Err(err);
        }

        Ok(())
    }
}

/// Reject zero, negative and non-finite amounts
pub(crate) fn require_positive(value: f64, what: &str) -> LedgerResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "{} must be greater than zero, got {}",
            what, value
        )))
    }
}

/// Reject blank categories, returning the trimmed name
pub(crate) fn require_category(category: &str) -> LedgerResult<&str> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::Validation("Category cannot be empty".into()));
    }
    Ok(trimmed)
}
