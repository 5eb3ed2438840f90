//! In-memory directory
//!
//! Keeps accounts in a map and never touches the filesystem. `flush` only
//! counts snapshots, which lets callers check how often the ledger persists.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::LedgerResult;
use crate::models::Account;

use super::directory::{AccountMap, Directory};

/// Directory backed by process memory only
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    accounts: AccountMap,
    flushes: AtomicUsize,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `flush` has been called
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Number of registered accounts
    pub fn count(&self) -> LedgerResult<usize> {
        Ok(self.accounts.read()?.len())
    }
}

impl Directory for MemoryDirectory {
    fn get(&self, login: &str) -> LedgerResult<Option<Account>> {
        self.accounts.get(login)
    }

    fn put(&self, account: Account) -> LedgerResult<()> {
        self.accounts.put(account)
    }

    fn exists(&self, login: &str) -> LedgerResult<bool> {
        self.accounts.exists(login)
    }

    fn remove(&self, login: &str) -> LedgerResult<()> {
        self.accounts.remove(login)
    }

    fn flush(&self) -> LedgerResult<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn load(&self) -> LedgerResult<usize> {
        self.count()
    }
}
