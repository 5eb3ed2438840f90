//! Export module for Pocketbook
//!
//! The account report is the only export format: a sectioned text file
//! whose tabular parts are CSV.

pub mod report;

pub use report::{parse_operations, write_report, END_MARKER, OPERATIONS_HEADER};
