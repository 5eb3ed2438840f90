//! The account directory contract
//!
//! A directory maps login identifiers to accounts and owns persistence.
//! The ledger service reads and writes accounts only through this trait,
//! so it can run against the JSON file store or an in-memory map.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Account;

/// Login-to-account lookup and persistence boundary
pub trait Directory {
    /// Get a copy of the account registered under `login`
    fn get(&self, login: &str) -> LedgerResult<Option<Account>>;

    /// Insert or replace an account, keyed by its login
    fn put(&self, account: Account) -> LedgerResult<()>;

    /// Check whether a login is registered
    fn exists(&self, login: &str) -> LedgerResult<bool>;

    /// Drop an unflushed entry, used to undo a failed insert
    fn remove(&self, login: &str) -> LedgerResult<()>;

    /// Persist a full snapshot of every account
    fn flush(&self) -> LedgerResult<()>;

    /// Restore accounts from the last snapshot, returning how many were loaded
    ///
    /// Missing or unreadable snapshots count as "no prior state".
    fn load(&self) -> LedgerResult<usize>;
}

/// Lock-guarded map shared by the directory implementations
#[derive(Debug, Default)]
pub(crate) struct AccountMap {
    data: RwLock<BTreeMap<String, Account>>,
}

impl AccountMap {
    pub(crate) fn read(&self) -> LedgerResult<RwLockReadGuard<'_, BTreeMap<String, Account>>> {
        self.data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    pub(crate) fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, BTreeMap<String, Account>>> {
        self.data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub(crate) fn get(&self, login: &str) -> LedgerResult<Option<Account>> {
        Ok(self.read()?.get(login).cloned())
    }

    pub(crate) fn put(&self, account: Account) -> LedgerResult<()> {
        self.write()?.insert(account.login().to_string(), account);
        Ok(())
    }

    pub(crate) fn exists(&self, login: &str) -> LedgerResult<bool> {
        Ok(self.read()?.contains_key(login))
    }

    pub(crate) fn remove(&self, login: &str) -> LedgerResult<()> {
        self.write()?.remove(login);
        Ok(())
    }

    /// All accounts, sorted by login
    pub(crate) fn snapshot(&self) -> LedgerResult<Vec<Account>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub(crate) fn replace_all(&self, accounts: Vec<Account>) -> LedgerResult<usize> {
        let mut data = self.write()?;
        data.clear();
        for account in accounts {
            data.insert(account.login().to_string(), account);
        }
        Ok(data.len())
    }
}
