//! Account report
//!
//! A plain-text report with three sections: wallet balance, budget lines
//! with their actuals, and every raw operation. The budget and operation
//! sections are CSV so they can be read back by [`parse_operations`].
//!
//! ```text
//! === WALLET ===
//! User: alice
//! Current balance: 395 units
//!
//! === BUDGET ===
//! Type,Subtype,Month,SetLimit,Actual,Difference
//! EXPENSE,food,2024-05,100,105,-5
//!
//! === OPERATIONS ===
//! Date,Type,Subtype,Amount,Name
//! 2024-05-10,EXPENSE,food,85,Market
//!
//! === END OF REPORT ===
//! ```

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, Operation, OperationKind};
use crate::services::BudgetLine;

pub const WALLET_HEADER: &str = "=== WALLET ===";
pub const BUDGET_HEADER: &str = "=== BUDGET ===";
pub const OPERATIONS_HEADER: &str = "=== OPERATIONS ===";
pub const END_MARKER: &str = "=== END OF REPORT ===";

const BUDGET_COLUMNS: [&str; 6] = ["Type", "Subtype", "Month", "SetLimit", "Actual", "Difference"];
const OPERATION_COLUMNS: [&str; 5] = ["Date", "Type", "Subtype", "Amount", "Name"];

fn write_error(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Validation(format!("Failed to write report: {}", e))
}

/// Write the full report for `account`
///
/// `budget_lines` are the account's budget items with computed actuals, in
/// insertion order. Any write failure is reported as a validation error.
pub fn write_report<W: Write>(
    writer: &mut W,
    account: &Account,
    budget_lines: &[BudgetLine],
) -> LedgerResult<()> {
    writeln!(writer, "{}", WALLET_HEADER).map_err(write_error)?;
    writeln!(writer, "User: {}", account.login()).map_err(write_error)?;
    writeln!(writer, "Current balance: {} units", account.balance()).map_err(write_error)?;
    writeln!(writer).map_err(write_error)?;

    writeln!(writer, "{}", BUDGET_HEADER).map_err(write_error)?;
    let budget_rows = budget_lines.iter().map(|line| {
        vec![
            line.kind.to_string(),
            line.category.clone(),
            line.month.to_string(),
            line.limit.to_string(),
            line.actual.to_string(),
            line.remainder.to_string(),
        ]
    });
    write_csv_section(writer, &BUDGET_COLUMNS, budget_rows)?;

    writeln!(writer).map_err(write_error)?;
    writeln!(writer, "{}", OPERATIONS_HEADER).map_err(write_error)?;
    let operation_rows = account.operations().iter().map(|op| {
        vec![
            op.date().format("%Y-%m-%d").to_string(),
            op.kind().to_string(),
            op.category().to_string(),
            op.amount().to_string(),
            op.label().to_string(),
        ]
    });
    write_csv_section(writer, &OPERATION_COLUMNS, operation_rows)?;

    writeln!(writer).map_err(write_error)?;
    writeln!(writer, "{}", END_MARKER).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(())
}

fn write_csv_section<W, I>(writer: &mut W, header: &[&str], rows: I) -> LedgerResult<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut *writer);

    csv_writer.write_record(header).map_err(write_error)?;
    for row in rows {
        csv_writer.write_record(&row).map_err(write_error)?;
    }
    csv_writer.flush().map_err(write_error)?;

    Ok(())
}

/// Parse the OPERATIONS section of a report back into operations
pub fn parse_operations(report: &str) -> LedgerResult<Vec<Operation>> {
    let start = operations_start(report)?;

    let rest = &report[start..];
    let end = rest
        .rfind(END_MARKER)
        .ok_or_else(|| LedgerError::Validation("Report is missing its end marker".into()))?;
    let section = rest[..end].trim_matches(|c| c == '\n' || c == '\r');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(section.as_bytes());

    let mut operations = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;

        if record.len() != OPERATION_COLUMNS.len() {
            return Err(LedgerError::Validation(format!(
                "Operation row {} has {} fields, expected {}",
                row,
                record.len(),
                OPERATION_COLUMNS.len()
            )));
        }

        let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d").map_err(|e| {
            LedgerError::Validation(format!("Operation row {}: bad date '{}': {}", row, &record[0], e))
        })?;
        let kind: OperationKind = record[1]
            .parse()
            .map_err(|e| LedgerError::Validation(format!("Operation row {}: {}", row, e)))?;
        let amount: f64 = record[3].parse().map_err(|e| {
            LedgerError::Validation(format!("Operation row {}: bad amount '{}': {}", row, &record[3], e))
        })?;

        operations.push(Operation::new(kind, &record[2], amount, &record[4], date));
    }

    Ok(operations)
}

/// Byte offset just past the OPERATIONS header line
///
/// The header must be a whole CSV record following the BUDGET header, so
/// quoted budget fields or a login cannot stand in for it.
fn operations_start(report: &str) -> LedgerResult<usize> {
    let budget = line_end(report, BUDGET_HEADER)
        .ok_or_else(|| LedgerError::Validation("Report has no BUDGET section".into()))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(report[budget..].as_bytes());

    let mut record = csv::StringRecord::new();
    while reader.read_record(&mut record)? {
        if record.len() == 1 && &record[0] == OPERATIONS_HEADER {
            return Ok(budget + reader.position().byte() as usize);
        }
    }

    Err(LedgerError::Validation("Report has no OPERATIONS section".into()))
}

/// Offset just past the first line equal to `header`
fn line_end(report: &str, header: &str) -> Option<usize> {
    let mut offset = 0;
    for line in report.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end_matches(['\n', '\r']) == header {
            return Some(offset);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetMonth;

    const BUDGET: &str = "=== BUDGET ===\nType,Subtype,Month,SetLimit,Actual,Difference\n\n";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_write_report_budget_rows() {
        let mut account = Account::new("carol", "h");
        account.push_operation(Operation::income("salary", 1200.0, "", date(2024, 5, 3)));

        let lines = vec![BudgetLine {
            kind: OperationKind::Income,
            category: "salary".into(),
            month: BudgetMonth::new(2024, 5).unwrap(),
            limit: 1000.0,
            actual: 1200.0,
            remainder: -200.0,
        }];

        let mut out = Vec::new();
        write_report(&mut out, &account, &lines).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("INCOME,salary,2024-05,1000,1200,-200\n"));
        assert!(text.contains("2024-05-03,INCOME,salary,1200,\n"));
    }

    #[test]
    fn test_fractional_amounts_survive() {
        let mut account = Account::new("carol", "h");
        account.push_operation(Operation::expense("coffee", 0.1 + 0.2, "", date(2024, 1, 2)));

        let mut out = Vec::new();
        write_report(&mut out, &account, &[]).unwrap();
        let parsed = parse_operations(&String::from_utf8(out).unwrap()).unwrap();

        assert_eq!(parsed[0].amount(), 0.1 + 0.2);
    }

    #[test]
    fn test_parse_rejects_missing_sections() {
        assert!(parse_operations("=== WALLET ===\n").unwrap_err().is_validation());
        assert!(parse_operations("=== OPERATIONS ===\nDate,Type,Subtype,Amount,Name\n")
            .unwrap_err()
            .is_validation());
        assert!(parse_operations(&format!("{}{}\nDate,Type,Subtype,Amount,Name\n", BUDGET, OPERATIONS_HEADER))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        let bad_kind = format!("{}{}", BUDGET, "=== OPERATIONS ===\nDate,Type,Subtype,Amount,Name\n\
                        2024-05-01,REFUND,food,5,\n\n=== END OF REPORT ===\n");
        assert!(parse_operations(&bad_kind).unwrap_err().is_validation());

        let bad_date = format!("{}{}", BUDGET, "=== OPERATIONS ===\nDate,Type,Subtype,Amount,Name\n\
                        2024-13-01,EXPENSE,food,5,\n\n=== END OF REPORT ===\n");
        assert!(parse_operations(&bad_date).unwrap_err().is_validation());

        let bad_amount = format!("{}{}", BUDGET, "=== OPERATIONS ===\nDate,Type,Subtype,Amount,Name\n\
                          2024-05-01,EXPENSE,food,five,\n\n=== END OF REPORT ===\n");
        assert!(parse_operations(&bad_amount).unwrap_err().is_validation());
    }

    #[test]
    fn test_section_markers_inside_fields_are_ignored() {
        let mut account = Account::new("=== OPERATIONS ===", "h");
        account.push_operation(Operation::expense("food", 5.0, "=== END OF REPORT ===", date(2024, 5, 2)));

        let lines = vec![BudgetLine {
            kind: OperationKind::Expense,
            category: "x\n=== OPERATIONS ===\nDate,Type,Subtype,Amount,Name\n2024-01-01,INCOME,fake,1,".into(),
            month: BudgetMonth::new(2024, 5).unwrap(),
            limit: 10.0,
            actual: 0.0,
            remainder: 10.0,
        }];

        let mut out = Vec::new();
        write_report(&mut out, &account, &lines).unwrap();
        let parsed = parse_operations(&String::from_utf8(out).unwrap()).unwrap();

        assert_eq!(parsed, account.operations());
    }
}
