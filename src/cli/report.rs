//! Report export command

use std::path::PathBuf;

use crate::config::paths::PocketbookPaths;
use crate::error::LedgerResult;
use crate::models::Account;
use crate::services::LedgerService;
use crate::storage::Directory;

/// Default report location: `<reports dir>/<login>_report.txt`
pub fn default_report_path(paths: &PocketbookPaths, login: &str) -> PathBuf {
    paths.reports_dir().join(format!("{}_report.txt", login))
}

/// Handle the report command
pub fn handle_report_command<D: Directory + ?Sized>(
    service: &LedgerService<'_, D>,
    account: &Account,
    paths: &PocketbookPaths,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let destination = output.unwrap_or_else(|| default_report_path(paths, account.login()));
    service.export_report(account, &destination)?;
    println!("Report written to {}", destination.display());
    Ok(())
}
