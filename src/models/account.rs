//! Account model
//!
//! An account is one user's complete financial record: the credential used
//! to log in, every operation entered, and every budget item planned.
//! Balances and category sums are derived on demand and never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::budget::BudgetItem;
use super::month::BudgetMonth;
use super::operation::{same_category, Operation, OperationKind};

/// A user's wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    login: String,

    /// Salted one-way hash of the account secret (PHC string format)
    credential: String,

    /// Operations in the order they were entered
    #[serde(default)]
    operations: Vec<Operation>,

    /// Budget items in the order they were added
    #[serde(default)]
    budgets: Vec<BudgetItem>,

    /// When the account was first registered
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an empty account
    pub fn new(login: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            credential: credential.into(),
            operations: Vec::new(),
            budgets: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn budgets(&self) -> &[BudgetItem] {
        &self.budgets
    }

    pub(crate) fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub(crate) fn push_budget(&mut self, budget: BudgetItem) {
        self.budgets.push(budget);
    }

    pub(crate) fn budgets_mut(&mut self) -> &mut [BudgetItem] {
        &mut self.budgets
    }

    /// Current balance: total income minus total expense
    pub fn balance(&self) -> f64 {
        let income: f64 = self.sum_where(|o| o.is_income());
        let expense: f64 = self.sum_where(|o| o.is_expense());
        income - expense
    }

    /// Total of operations of `kind` in `category` (case-insensitive) during `month`
    pub fn total_in_month(&self, kind: OperationKind, category: &str, month: BudgetMonth) -> f64 {
        self.sum_where(|o| {
            o.kind() == kind && same_category(o.category(), category) && month.contains(o.date())
        })
    }

    /// Total expense for a category in a month
    pub fn spent_in_month(&self, category: &str, month: BudgetMonth) -> f64 {
        self.total_in_month(OperationKind::Expense, category, month)
    }

    /// Total income for a category in a month
    pub fn income_in_month(&self, category: &str, month: BudgetMonth) -> f64 {
        self.total_in_month(OperationKind::Income, category, month)
    }

    /// First budget item, in insertion order, matching kind, category and month
    pub fn find_budget(
        &self,
        kind: OperationKind,
        category: &str,
        month: BudgetMonth,
    ) -> Option<&BudgetItem> {
        self.budgets
            .iter()
            .find(|b| b.kind() == kind && b.covers(category, month))
    }

    fn sum_where<F>(&self, predicate: F) -> f64
    where
        F: Fn(&Operation) -> bool,
    {
        self.operations
            .iter()
            .filter(|o| predicate(o))
            .map(Operation::amount)
            .fold(0.0, |total, amount| total + amount)
    }
}
