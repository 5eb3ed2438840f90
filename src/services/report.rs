//! Report export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::LedgerService;
use crate::error::{LedgerError, LedgerResult};
use crate::export::report::{parse_operations, write_report};
use crate::models::{Account, Operation};
use crate::storage::Directory;

impl<D: Directory + ?Sized> LedgerService<'_, D> {
    /// Write the account report to `destination`, replacing any existing file
    pub fn export_report(&self, account: &Account, destination: &Path) -> LedgerResult<()> {
        let file = File::create(destination).map_err(|e| {
            LedgerError::Validation(format!(
                "Cannot write report to {}: {}",
                destination.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        self.render_report(account, &mut writer)?;

        info!(login = account.login(), path = %destination.display(), "report exported");
        Ok(())
    }

    /// Write the account report to any writer
    pub fn render_report<W: Write>(&self, account: &Account, writer: &mut W) -> LedgerResult<()> {
        let lines = self.budget_lines(account);
        write_report(writer, account, &lines)
    }

    /// Read operations back from a rendered report
    pub fn parse_report_operations(&self, report: &str) -> LedgerResult<Vec<Operation>> {
        parse_operations(report)
    }
}
