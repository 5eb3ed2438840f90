//! Custom error types for Pocketbook
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions. Every failure is returned to the caller;
//! nothing in the library terminates the process.

use thiserror::Error;

/// The main error type for Pocketbook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed or out-of-range input: non-positive amounts or limits,
    /// blank categories, insufficient balance, unwritable report
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credential mismatch on an existing login
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credential hashing or verification failures (not a wrong secret)
    #[error("Credential error: {0}")]
    Credential(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget items
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Validation(format!("Malformed report row: {}", err))
    }
}

/// Result type alias for Pocketbook operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("Limit must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Limit must be greater than zero"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::account_not_found("bob");
        assert_eq!(err.to_string(), "Account not found: bob");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_authentication_error() {
        let err = LedgerError::Authentication("wrong password".into());
        assert_eq!(err.to_string(), "Authentication failed: wrong password");
        assert!(err.is_authentication());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
