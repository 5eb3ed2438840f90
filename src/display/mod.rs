//! Display formatting for terminal output
//!
//! Tables for operations, budgets and monthly actuals. Amounts are shown
//! with two decimals; the stored values keep full precision.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BudgetItem, Operation};
use crate::services::{BudgetLine, LimitAlert, MonthSummary, TransferReceipt};

#[derive(Tabled)]
struct OperationRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Label")]
    label: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Limit")]
    limit: String,
}

#[derive(Tabled)]
struct ActualRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Planned")]
    limit: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Remaining")]
    remainder: String,
}

fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format operations as a table, oldest first
pub fn format_operations(operations: &[Operation], date_format: &str) -> String {
    if operations.is_empty() {
        return "No operations recorded.".to_string();
    }

    let rows = operations.iter().map(|op| OperationRow {
        date: op.date().format(date_format).to_string(),
        kind: op.kind().to_string(),
        category: op.category().to_string(),
        amount: amount(op.amount()),
        label: op.label().to_string(),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format budget items as a table
pub fn format_budgets(budgets: &[BudgetItem]) -> String {
    if budgets.is_empty() {
        return "No budgets set.".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetRow {
        kind: b.kind().to_string(),
        category: b.category().to_string(),
        month: b.month().to_string(),
        limit: amount(b.limit()),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

fn actual_table(lines: &[BudgetLine]) -> String {
    let rows = lines.iter().map(|l| ActualRow {
        category: l.category.clone(),
        limit: amount(l.limit),
        actual: amount(l.actual),
        remainder: amount(l.remainder),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format planned versus actual figures for one month
pub fn format_month_summary(summary: &MonthSummary, currency: &str) -> String {
    let mut output = format!("Budget actuals for {}\n\n", summary.month);

    if summary.income.is_empty() && summary.expense.is_empty() {
        output.push_str("No budgets set for this month.\n");
        return output;
    }

    if !summary.income.is_empty() {
        output.push_str("Income\n");
        output.push_str(&actual_table(&summary.income));
        output.push_str("\n\n");
    }

    if !summary.expense.is_empty() {
        output.push_str("Expense\n");
        output.push_str(&actual_table(&summary.expense));
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "Income:  {} {}\nExpense: {} {}\nNet:     {} {}\n",
        amount(summary.total_income()),
        currency,
        amount(summary.total_expense()),
        currency,
        amount(summary.net()),
        currency
    ));

    output
}

pub fn format_balance(balance: f64, currency: &str) -> String {
    format!("Balance: {} {}", amount(balance), currency)
}

pub fn format_alert(alert: &LimitAlert) -> String {
    let prefix = if alert.is_exceeded() { "Over budget" } else { "Warning" };
    format!("{}: {}", prefix, alert)
}

pub fn format_receipt(receipt: &TransferReceipt, currency: &str) -> String {
    format!(
        "Transferred {} {} to {} on {}",
        amount(receipt.amount),
        currency,
        receipt.recipient,
        receipt.date.format("%Y-%m-%d")
    )
}
