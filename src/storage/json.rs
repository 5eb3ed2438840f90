//! JSON file directory
//!
//! Keeps every account in memory and writes the whole set to
//! `accounts.json` on each flush.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::models::Account;

use super::directory::{AccountMap, Directory};
use super::file_io::{read_json, write_json_atomic};

const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of every account
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    schema_version: u32,
    accounts: Vec<Account>,
}

/// Directory persisted as a single JSON snapshot file
pub struct JsonDirectory {
    path: PathBuf,
    accounts: AccountMap,
}

impl JsonDirectory {
    /// Create a directory bound to `path`; nothing is read until [`Directory::load`]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: AccountMap::default(),
        }
    }

    /// Create a directory and restore whatever the snapshot holds
    pub fn open(path: PathBuf) -> LedgerResult<Self> {
        let directory = Self::new(path);
        directory.load()?;
        Ok(directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Directory for JsonDirectory {
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
        let snapshot = Snapshot {
            schema_version: SNAPSHOT_VERSION,
            accounts: self.accounts.snapshot()?,
        };
        write_json_atomic(&self.path, &snapshot)?;
        debug!(path = %self.path.display(), accounts = snapshot.accounts.len(), "snapshot written");
        Ok(())
    }

    fn load(&self) -> LedgerResult<usize> {
        let accounts = match read_json::<Snapshot, _>(&self.path) {
            Ok(Some(snapshot)) => snapshot.accounts,
            Ok(None) => {
                debug!(path = %self.path.display(), "no snapshot, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable snapshot");
                Vec::new()
            }
        };

        self.accounts.replace_all(accounts)
    }
}
