//! Operations and limit evaluation

use tracing::{info, warn};

use super::alert::{AlertLevel, LimitAlert};
use super::{require_category, require_positive, LedgerService};
use crate::error::LedgerResult;
use crate::models::{Account, BudgetMonth, Operation, OperationKind};
use crate::storage::Directory;

impl<D: Directory + ?Sized> LedgerService<'_, D> {
    /// Record an operation and evaluate the matching expense budget
    ///
    /// The returned alert is advisory: the operation is already committed
    /// when it is produced.
    pub fn add_operation(
        &self,
        account: &mut Account,
        operation: Operation,
    ) -> LedgerResult<Option<LimitAlert>> {
        require_positive(operation.amount(), "Amount")?;
        let operation = Operation::new(
            operation.kind(),
            require_category(operation.category())?,
            operation.amount(),
            operation.label(),
            operation.date(),
        );

        let _guard = self.lock()?;
        let mut staged = self.current(account)?;

        staged.push_operation(operation.clone());
        self.commit(&[&staged])?;
        *account = staged;

        info!(
            login = account.login(),
            kind = %operation.kind(),
            category = operation.category(),
            amount = operation.amount(),
            "operation recorded"
        );

        let alert = self.evaluate_limit(account, &operation);
        if let Some(alert) = &alert {
            warn!(login = account.login(), "{}", alert);
        }
        Ok(alert)
    }

    /// Compare month-to-date spending against the first matching expense budget
    ///
    /// `operation` is expected to be already recorded on `account`.
    pub fn evaluate_limit(&self, account: &Account, operation: &Operation) -> Option<LimitAlert> {
        if !operation.is_expense() {
            return None;
        }

        let month = BudgetMonth::from_date(operation.date());
        let budget = account.find_budget(OperationKind::Expense, operation.category(), month)?;
        let spent = account.spent_in_month(operation.category(), month);

        AlertLevel::classify(&self.settings.alerts, budget.limit(), spent).map(|level| LimitAlert {
            level,
            category: budget.category().to_string(),
            month,
            limit: budget.limit(),
            spent,
        })
    }

    /// Total expense for a category (case-insensitive) in a month
    pub fn spent_in_month(&self, account: &Account, category: &str, month: BudgetMonth) -> f64 {
        account.spent_in_month(category, month)
    }

    /// Total income for a category (case-insensitive) in a month
    pub fn income_in_month(&self, account: &Account, category: &str, month: BudgetMonth) -> f64 {
        account.income_in_month(category, month)
    }

    /// Operations in the order they were entered
    pub fn list_operations<'b>(&self, account: &'b Account) -> &'b [Operation] {
        account.operations()
    }

    /// Current balance of the committed record
    pub fn balance(&self, account: &Account) -> LedgerResult<f64> {
        Ok(self.current(account)?.balance())
    }
}
