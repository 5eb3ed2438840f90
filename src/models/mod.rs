//! Core data models for Pocketbook
//!
//! This module contains the data structures that represent the ledger
//! domain: accounts, operations, budget items and budget months.

pub mod account;
pub mod budget;
pub mod month;
pub mod operation;

pub use account::Account;
pub use budget::BudgetItem;
pub use month::{BudgetMonth, MonthParseError};
pub use operation::{same_category, Operation, OperationKind};
