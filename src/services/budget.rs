//! Budget management
//!
//! Budget items set a planned limit per kind, category and month. Actuals
//! are always computed from the account's operations.

use std::collections::BTreeMap;

use tracing::info;

use super::{require_category, require_positive, LedgerService};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, BudgetItem, BudgetMonth, OperationKind};
use crate::storage::Directory;

/// One budget item with its computed actual
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub kind: OperationKind,
    pub category: String,
    pub month: BudgetMonth,
    pub limit: f64,
    pub actual: f64,
    /// `limit - actual`
    pub remainder: f64,
}

impl BudgetLine {
    fn for_item(account: &Account, item: &BudgetItem) -> Self {
        let actual = account.total_in_month(item.kind(), item.category(), item.month());
        Self {
            kind: item.kind(),
            category: item.category().to_string(),
            month: item.month(),
            limit: item.limit(),
            actual,
            remainder: item.limit() - actual,
        }
    }
}

/// Planned versus actual figures for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: BudgetMonth,
    pub income: Vec<BudgetLine>,
    pub expense: Vec<BudgetLine>,
}

impl MonthSummary {
    /// Actual income across budgeted income categories
    pub fn total_income(&self) -> f64 {
        self.income.iter().fold(0.0, |total, l| total + l.actual)
    }

    /// Actual spending across budgeted expense categories
    pub fn total_expense(&self) -> f64 {
        self.expense.iter().fold(0.0, |total, l| total + l.actual)
    }

    pub fn net(&self) -> f64 {
        self.total_income() - self.total_expense()
    }
}

impl<D: Directory + ?Sized> LedgerService<'_, D> {
    /// Add a budget limit for a kind, category and month
    ///
    /// At most one item may exist per kind, category (case-insensitive) and month.
    pub fn add_budget(
        &self,
        account: &mut Account,
        kind: OperationKind,
        category: &str,
        month: BudgetMonth,
        limit: f64,
    ) -> LedgerResult<()> {
        require_positive(limit, "Limit")?;
        let category = require_category(category)?;

        let _guard = self.lock()?;
        let mut staged = self.current(account)?;

        if staged.find_budget(kind, category, month).is_some() {
            return Err(LedgerError::Duplicate {
                entity_type: "Budget",
                identifier: format!("{} {} {}", kind, category, month),
            });
        }

        staged.push_budget(BudgetItem::new(kind, category, month, limit));
        self.commit(&[&staged])?;
        *account = staged;

        info!(login = account.login(), %kind, category, %month, limit, "budget added");
        Ok(())
    }

    /// Change the limit of the first budget matching category and month
    pub fn edit_budget(
        &self,
        account: &mut Account,
        category: &str,
        month: BudgetMonth,
        new_limit: f64,
    ) -> LedgerResult<()> {
        require_positive(new_limit, "Limit")?;
        let category = require_category(category)?;

        let _guard = self.lock()?;
        let mut staged = self.current(account)?;

        let item = staged
            .budgets_mut()
            .iter_mut()
            .find(|b| b.covers(category, month))
            .ok_or_else(|| LedgerError::budget_not_found(format!("{} {}", category, month)))?;
        item.set_limit(new_limit);

        self.commit(&[&staged])?;
        *account = staged;

        info!(login = account.login(), category, %month, new_limit, "budget limit changed");
        Ok(())
    }

    /// Budget items in the order they were added
    pub fn list_budgets<'b>(&self, account: &'b Account) -> &'b [BudgetItem] {
        account.budgets()
    }

    /// `limit - actual` for every budget of `kind` in `month`, keyed by category
    pub fn actual_vs_planned(
        &self,
        account: &Account,
        month: BudgetMonth,
        kind: OperationKind,
    ) -> BTreeMap<String, f64> {
        account
            .budgets()
            .iter()
            .filter(|b| b.month() == month && b.kind() == kind)
            .map(|b| {
                let line = BudgetLine::for_item(account, b);
                (line.category, line.remainder)
            })
            .collect()
    }

    /// Every budget line for a month, split by kind, with totals
    pub fn month_summary(&self, account: &Account, month: BudgetMonth) -> MonthSummary {
        let lines = |kind: OperationKind| -> Vec<BudgetLine> {
            account
                .budgets()
                .iter()
                .filter(|b| b.month() == month && b.kind() == kind)
                .map(|b| BudgetLine::for_item(account, b))
                .collect()
        };

        MonthSummary {
            month,
            income: lines(OperationKind::Income),
            expense: lines(OperationKind::Expense),
        }
    }

    /// Budget line for every item of the account, in insertion order
    pub fn budget_lines(&self, account: &Account) -> Vec<BudgetLine> {
        account
            .budgets()
            .iter()
            .map(|b| BudgetLine::for_item(account, b))
            .collect()
    }
}
