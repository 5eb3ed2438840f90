//! Storage layer for Pocketbook
//!
//! Defines the [`Directory`] contract the ledger service depends on and
//! provides a JSON file implementation with atomic writes and an in-memory
//! implementation.

pub mod directory;
pub mod file_io;
pub mod json;
pub mod memory;

pub use directory::Directory;
pub use file_io::{read_json, write_json_atomic};
pub use json::JsonDirectory;
pub use memory::MemoryDirectory;

use crate::config::paths::PocketbookPaths;
use crate::error::LedgerError;

/// Open the on-disk directory for the given paths, creating directories as needed
pub fn open_directory(paths: &PocketbookPaths) -> Result<JsonDirectory, LedgerError> {
    paths.ensure_directories()?;
    JsonDirectory::open(paths.accounts_file())
}
