//! Operation model
//!
//! An operation is a single income or expense entry in an account's ledger.
//! Operations are immutable once recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income/Expense discriminator shared by operations and budget items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Income,
    Expense,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown operation kind '{}', expected INCOME or EXPENSE",
                other
            )),
        }
    }
}

/// Category comparison used for every budget/operation match
///
/// Surrounding whitespace and case are ignored.
pub fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    kind: OperationKind,
    category: String,
    amount: f64,
    #[serde(default)]
    label: String,
    date: NaiveDate,
}

impl Operation {
    /// Create a new operation
    ///
    /// The amount is not checked here; the ledger service rejects
    /// non-positive amounts before an operation reaches an account.
    pub fn new(
        kind: OperationKind,
        category: impl Into<String>,
        amount: f64,
        label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            label: label.into(),
            date,
        }
    }

    /// Shorthand for an income operation
    pub fn income(
        category: impl Into<String>,
        amount: f64,
        label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(OperationKind::Income, category, amount, label, date)
    }

    /// Shorthand for an expense operation
    pub fn expense(
        category: impl Into<String>,
        amount: f64,
        label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(OperationKind::Expense, category, amount, label, date)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind == OperationKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == OperationKind::Expense
    }

    /// Signed contribution of this operation to the account balance
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            OperationKind::Income => self.amount,
            OperationKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.date, self.kind, self.category, self.amount, self.label
        )
    }
}
