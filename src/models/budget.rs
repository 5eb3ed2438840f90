//! Budget item model
//!
//! A planned limit for one category of income or expense in one month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::BudgetMonth;
use super::operation::{same_category, OperationKind};

/// A per-category, per-month limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    kind: OperationKind,
    category: String,
    month: BudgetMonth,
    limit: f64,

    /// When this item was created
    pub created_at: DateTime<Utc>,

    /// When the limit was last changed
    pub updated_at: DateTime<Utc>,
}

impl BudgetItem {
    /// Create a new budget item
    pub fn new(
        kind: OperationKind,
        category: impl Into<String>,
        month: BudgetMonth,
        limit: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            kind,
            category: category.into(),
            month,
            limit,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn month(&self) -> BudgetMonth {
        self.month
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Replace the limit
    pub(crate) fn set_limit(&mut self, limit: f64) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    /// Check whether this item covers the given category (case-insensitive) and month
    pub fn covers(&self, category: &str, month: BudgetMonth) -> bool {
        self.month == month && same_category(&self.category, category)
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | limit: {}",
            self.kind, self.category, self.month, self.limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> BudgetMonth {
        BudgetMonth::new(2024, 5).unwrap()
    }

    #[test]
    fn test_covers_is_case_insensitive() {
        let item = BudgetItem::new(OperationKind::Expense, "Food", may(), 100.0);
        assert!(item.covers("food", may()));
        assert!(item.covers("FOOD", may()));
        assert!(!item.covers("food", BudgetMonth::new(2024, 6).unwrap()));
        assert!(!item.covers("fuel", may()));
    }

    #[test]
    fn test_set_limit_touches_updated_at() {
        let mut item = BudgetItem::new(OperationKind::Income, "salary", may(), 1000.0);
        let created = item.updated_at;
        item.set_limit(1500.0);
        assert_eq!(item.limit(), 1500.0);
        assert!(item.updated_at >= created);
    }

    #[test]
    fn test_display() {
        let item = BudgetItem::new(OperationKind::Expense, "food", may(), 100.0);
        assert_eq!(item.to_string(), "EXPENSE | food | 2024-05 | limit: 100");
    }
}
