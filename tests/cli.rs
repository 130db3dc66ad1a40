//! End-to-end CLI tests
//!
//! Each test runs the binary against a scratch data directory via the
//! FINSIGHT_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn finsight(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finsight").unwrap();
    cmd.env("FINSIGHT_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_init_and_config() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized finsight"));

    finsight(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top categories: 3"));
}

#[test]
fn test_add_transaction_and_summary() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["tx", "add", "income", "salary", "5000", "--date", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income salary"));

    finsight(&data_dir)
        .args(["tx", "add", "expense", "food", "12.50", "--date", "2025-01-10"])
        .assert()
        .success();

    finsight(&data_dir)
        .args(["report", "summary", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs 5000.00"))
        .stdout(predicate::str::contains("Rs 4987.50"))
        .stdout(predicate::str::contains("99.7%"));
}

#[test]
fn test_invalid_category_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["tx", "add", "expense", "salary", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown expense category"));
}

#[test]
fn test_budget_status_and_alerts() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["budget", "set", "food", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set budget"));

    finsight(&data_dir)
        .args(["tx", "add", "income", "salary", "5000", "--date", "2025-01-01"])
        .assert()
        .success();

    // 95% of the food budget: critical alert territory
    finsight(&data_dir)
        .args(["tx", "add", "expense", "food", "95", "--date", "2025-01-05"])
        .assert()
        .success();

    finsight(&data_dir)
        .args(["budget", "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("95.0%"));

    finsight(&data_dir)
        .args(["alerts", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRITICAL"))
        .stdout(predicate::str::contains("food"));
}

#[test]
fn test_goal_lifecycle() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["goal", "add", "Vacation", "1000", "2099-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal 'Vacation'"));

    finsight(&data_dir)
        .args(["goal", "contribute", "vacation", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rs 250.00"));

    finsight(&data_dir)
        .args(["report", "goals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation"))
        .stdout(predicate::str::contains("25.0%"));

    finsight(&data_dir)
        .args(["goal", "delete", "Vacation"])
        .assert()
        .success();

    finsight(&data_dir)
        .args(["goal", "delete", "Vacation"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found"));
}

#[test]
fn test_recommendations_for_overspent_budget() {
    let data_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["budget", "set", "food", "100"])
        .assert()
        .success();
    finsight(&data_dir)
        .args(["tx", "add", "income", "salary", "5000", "--date", "2025-01-01"])
        .assert()
        .success();
    finsight(&data_dir)
        .args(["tx", "add", "expense", "food", "130", "--date", "2025-01-05"])
        .assert()
        .success();

    finsight(&data_dir)
        .args(["recommend", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cut food spending by Rs 30.00"));
}

#[test]
fn test_csv_export() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    finsight(&data_dir)
        .args(["tx", "add", "expense", "food", "12.50", "--date", "2025-01-10"])
        .assert()
        .success();

    finsight(&data_dir)
        .args(["export", "csv", "--out"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let csv = std::fs::read_to_string(out_dir.path().join("transactions.csv")).unwrap();
    assert!(csv.contains("2025-01-10,expense,food,12.50"));
}
