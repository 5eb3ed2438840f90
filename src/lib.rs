//! Pocketbook - personal wallet ledger
//!
//! Each user has one account holding income and expense operations and a
//! set of monthly category budgets. Recording an expense compares the
//! month's spending against its budget and raises an alert at configurable
//! thresholds. Users can move money to each other and export a report of
//! their account.
//!
//! # Architecture
//!
//! - `config`: paths and settings
//! - `error`: error types
//! - `crypto`: credential hashing
//! - `models`: accounts, operations, budgets, months
//! - `storage`: the [`storage::Directory`] contract and its JSON and memory implementations
//! - `services`: [`services::LedgerService`], the business rules
//! - `export`: the report format
//! - `display`, `cli`: terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pocketbook::config::{PocketbookPaths, Settings};
//! use pocketbook::services::LedgerService;
//! use pocketbook::storage::open_directory;
//!
//! let paths = PocketbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let directory = open_directory(&paths)?;
//! let service = LedgerService::new(&directory, &settings);
//! let account = service.authenticate("alice", &"secret".into())?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
