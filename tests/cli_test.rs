//! End-to-end tests of the pocketbook binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A data directory with cheap Argon2 settings so each run stays fast
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{ "credential": { "memory_cost": 64, "time_cost": 1, "parallelism": 1 } }"#,
    )
    .unwrap();
    dir
}

fn pocketbook(dir: &Path, login: &str, password: &str) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", dir)
        .env("POCKETBOOK_LOGIN", login)
        .env("POCKETBOOK_PASSWORD", password)
        .env_remove("POCKETBOOK_LOG");
    cmd
}

#[test]
fn test_config_needs_no_login() {
    let dir = data_dir();
    let mut cmd = Command::cargo_bin("pocketbook").unwrap();
    cmd.env("POCKETBOOK_DATA_DIR", dir.path())
        .env_remove("POCKETBOOK_LOGIN")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts file:"))
        .stdout(predicate::str::contains("Approaching alert: 80%"));
}

#[test]
fn test_budget_alert_scenario() {
    let dir = data_dir();

    pocketbook(dir.path(), "alice", "pw")
        .args(["income", "add", "salary", "500"])
        .assert()
        .success();

    pocketbook(dir.path(), "alice", "pw")
        .args(["budget", "add", "food", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set"));

    pocketbook(dir.path(), "alice", "pw")
        .args(["expense", "add", "food", "85", "--label", "Market"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reached 85% of the limit"));

    pocketbook(dir.path(), "alice", "pw")
        .args(["expense", "add", "Food", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Limit exceeded"));

    pocketbook(dir.path(), "alice", "pw")
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 395.00 units"));

    pocketbook(dir.path(), "alice", "pw")
        .args(["ops", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Market"));

    assert!(dir.path().join("data").join("accounts.json").exists());
}

#[test]
fn test_wrong_password_rejected() {
    let dir = data_dir();

    pocketbook(dir.path(), "alice", "right")
        .arg("balance")
        .assert()
        .success();

    pocketbook(dir.path(), "alice", "wrong")
        .arg("balance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn test_invalid_amounts_fail() {
    let dir = data_dir();

    pocketbook(dir.path(), "alice", "pw")
        .args(["expense", "add", "food", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be greater than zero"));

    pocketbook(dir.path(), "alice", "pw")
        .args(["income", "add", "salary", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_edit_missing_budget_fails() {
    let dir = data_dir();

    pocketbook(dir.path(), "alice", "pw")
        .args(["budget", "edit", "rent", "50", "--month", "2024-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found"));
}

#[test]
fn test_transfer_between_users() {
    let dir = data_dir();

    pocketbook(dir.path(), "bob", "pw-b")
        .arg("balance")
        .assert()
        .success();

    pocketbook(dir.path(), "alice", "pw-a")
        .args(["income", "add", "salary", "100"])
        .assert()
        .success();

    pocketbook(dir.path(), "alice", "pw-a")
        .args(["transfer", "bob", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transferred 30.00 units to bob"));

    pocketbook(dir.path(), "alice", "pw-a")
        .args(["transfer", "bob", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    pocketbook(dir.path(), "alice", "pw-a")
        .args(["transfer", "carol", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: carol"));

    pocketbook(dir.path(), "bob", "pw-b")
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: 30.00 units"));
}

#[test]
fn test_report_written_to_reports_dir() {
    let dir = data_dir();

    pocketbook(dir.path(), "alice", "pw")
        .args(["income", "add", "salary", "500", "--date", "2024-05-01"])
        .assert()
        .success();

    pocketbook(dir.path(), "alice", "pw")
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report =
        fs::read_to_string(dir.path().join("reports").join("alice_report.txt")).unwrap();
    assert!(report.contains("User: alice"));
    assert!(report.contains("Current balance: 500 units"));
    assert!(report.contains("2024-05-01,INCOME,salary,500,"));
}
