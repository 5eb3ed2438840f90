//! Budget limit alerts
//!
//! Recording an expense can push a category close to or past its monthly
//! limit. The ledger reports that as a [`LimitAlert`] value returned to the
//! caller; it is advisory and never turns into an error.

use std::fmt;

use crate::config::AlertThresholds;
use crate::models::BudgetMonth;

/// How close spending is to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// At or above the approaching threshold but below the exceeded one
    Approaching,
    /// At or above the exceeded threshold
    Exceeded,
}

impl AlertLevel {
    /// Classify `spent` against `limit`; the higher threshold wins
    pub fn classify(thresholds: &AlertThresholds, limit: f64, spent: f64) -> Option<Self> {
        let percent = spent / limit * 100.0;
        if percent >= thresholds.exceeded_percent {
            Some(Self::Exceeded)
        } else if percent >= thresholds.approaching_percent {
            Some(Self::Approaching)
        } else {
            None
        }
    }
}

/// Advisory notice produced when an expense nears or passes its budget
#[derive(Debug, Clone, PartialEq)]
pub struct LimitAlert {
    pub level: AlertLevel,
    pub category: String,
    pub month: BudgetMonth,
    pub limit: f64,
    pub spent: f64,
}

impl LimitAlert {
    /// Spending as a percentage of the limit
    pub fn percent(&self) -> f64 {
        self.spent / self.limit * 100.0
    }

    pub fn is_exceeded(&self) -> bool {
        self.level == AlertLevel::Exceeded
    }
}

impl fmt::Display for LimitAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            AlertLevel::Exceeded => write!(
                f,
                "Limit exceeded for category '{}' in {}: spent {} of {}",
                self.category, self.month, self.spent, self.limit
            ),
            AlertLevel::Approaching => write!(
                f,
                "Reached {:.0}% of the limit for category '{}' in {}: spent {} of {}",
                self.percent(),
                self.category,
                self.month,
                self.spent,
                self.limit
            ),
        }
    }
}
