use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.arg("--data-dir").arg(dir);
    cmd
}

fn add(dir: &Path, description: &str, amount: &str, category: &str) {
    expense(dir)
        .args(["add", description, amount, category])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"));
}

#[test]
fn add_then_list_normalizes_category_and_totals() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "150.50", "food");
    add(dir.path(), "Bus", "40", "Travel");

    expense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("====== Expense List ======"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Travel"))
        .stdout(predicate::str::contains("190.50"))
        .stdout(predicate::str::contains("food").not());
}

#[test]
fn add_defaults_category_to_other() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .args(["add", "Stamps", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Other"));
}

#[test]
fn invalid_amount_fails_without_touching_store() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["add", "Tea", "abc", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount: 'abc'"));

    assert!(!dir.path().join("expenses.json").exists());

    add(dir.path(), "Coffee", "10", "Food");
    let before = fs::read(dir.path().join("expenses.json")).unwrap();

    expense(dir.path())
        .args(["add", "Tea", "12,5", "Food"])
        .assert()
        .failure();

    let after = fs::read(dir.path().join("expenses.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn negative_amount_is_accepted() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Refund", "-5", "Shopping");

    expense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("-5.00"));
}

#[test]
fn list_on_empty_store() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet!"));
}

#[test]
fn corrupt_store_is_audited_only_when_overwritten() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("expenses.json"), "{ not json").unwrap();

    for _ in 0..2 {
        expense(dir.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No expenses recorded yet!"));
    }

    expense(dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));

    add(dir.path(), "Coffee", "10", "Food");

    expense(dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("RECOVER Store").count(1))
        .stdout(predicate::str::contains("CREATE Expense"));
}

#[test]
fn summary_without_charts() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "150", "food");
    add(dir.path(), "Bus", "50", "Travel");

    expense(dir.path())
        .args(["summary", "--no-charts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food           : ₹150.00"))
        .stdout(predicate::str::contains("Total: ₹200.00"))
        .stdout(predicate::str::contains("Expense by Category").not());
}

#[test]
fn summary_draws_text_charts_when_piped() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "150", "food");
    add(dir.path(), "Bus", "50", "Travel");

    expense(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense by Category"))
        .stdout(predicate::str::contains("75.0%"))
        .stdout(predicate::str::contains("Total: ₹200.00"));
}

#[test]
fn summary_on_empty_store() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to analyze!"));
}

#[test]
fn monthly_distinguishes_empty_ledger_from_empty_month() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["monthly", "1", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet!"));

    add(dir.path(), "Coffee", "10", "Food");

    expense(dir.path())
        .args(["monthly", "1", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records for this month!"));
}

#[test]
fn monthly_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .args(["monthly", "13", "2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn export_writes_csv_file() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee, large", "150.50", "food");
    let output = dir.path().join("out.csv");

    expense(dir.path())
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to:"));

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Description,Category,Amount");
    assert!(lines[1].ends_with(",\"Coffee, large\",Food,150.50"));
}

#[test]
fn export_to_stdout() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "150.50", "food");

    expense(dir.path())
        .args(["export", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Category,Amount,Percentage"))
        .stdout(predicate::str::contains("Food,150.50"));
}

#[test]
fn export_of_empty_store_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    expense(dir.path())
        .args(["export", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("No expenses recorded yet!"));

    assert!(!output.exists());
}

#[test]
fn shell_exits_on_choice_five() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("========== EXPENSE TRACKER =========="))
        .stdout(predicate::str::contains("Exiting... Have a great day!"));
}

#[test]
fn shell_adds_expense() {
    let dir = TempDir::new().unwrap();
    expense(dir.path())
        .arg("shell")
        .write_stdin("1\nCoffee\n150.50\nfood\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("Total Spent:"));

    let stored = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(stored.contains("\"Food\""));
}

#[test]
fn audit_lists_created_expenses() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Coffee", "10", "Food");

    expense(dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"))
        .stdout(predicate::str::contains("(Coffee)"));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();

    expense(dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: ₹"));

    assert!(dir.path().join("config.json").exists());
}
