use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn fintrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_summarize_flow() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "1000", "USD"])
        .assert()
        .success()
        .stdout(contains("Budget threshold set to $1,000.00"));

    fintrack(&home)
        .args(["add", "expense", "950", "food & dining", "Team", "dinner"])
        .assert()
        .success()
        .stdout(contains("Transaction added"));

    fintrack(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Spent:    $950.00"))
        .stdout(contains("Budget used:    95.0%"))
        .stdout(contains("approaching your budget limit"))
        .stdout(contains("Food & Dining is your highest expense category"));

    fintrack(&home)
        .args(["recent", "expense"])
        .assert()
        .success()
        .stdout(contains("Team dinner"));

    let stored =
        std::fs::read_to_string(home.path().join("store/financeTransactions.json")).unwrap();
    assert!(stored.contains("\"Food & Dining\""));
}

#[test]
fn rejects_non_numeric_amount() {
    let home = TempDir::new().unwrap();
    fintrack(&home)
        .args(["add", "expense", "twelve", "Housing"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount `twelve`"));
}

#[test]
fn rejects_category_of_the_wrong_kind() {
    let home = TempDir::new().unwrap();
    fintrack(&home)
        .args(["add", "investment", "10", "Housing"])
        .assert()
        .failure()
        .stderr(contains("Unknown investment category `Housing`"));
}

#[test]
fn empty_ledger_reports_healthy_finances() {
    let home = TempDir::new().unwrap();
    fintrack(&home)
        .arg("suggestions")
        .assert()
        .success()
        .stdout(contains("Great job! Your finances look healthy."));
}

#[test]
fn export_prints_rows_as_json() {
    let home = TempDir::new().unwrap();
    fintrack(&home)
        .args([
            "add",
            "investment",
            "250",
            "ETFs",
            "--currency",
            "EUR",
            "--date",
            "2024-02-29",
        ])
        .assert()
        .success();

    fintrack(&home)
        .arg("export")
        .assert()
        .success()
        .stdout(contains("\"Category\": \"ETFs\""))
        .stdout(contains("\"Date\": \"2024-02-29\""))
        .stdout(contains("\"Currency\": \"EUR\""));
}
