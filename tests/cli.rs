use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn poupe(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("poupe").unwrap();
    cmd.env("POUPE_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, args: &[&str]) {
    poupe(dir).arg("add").args(args).assert().success();
}

#[test]
fn add_list_and_summary() {
    let dir = TempDir::new().unwrap();

    poupe(&dir)
        .args(["add", "Salário", "1000", "--type", "income", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income 'Salário'"));
    add(&dir, &["Aluguel", "300", "-m", "jan"]);

    poupe(&dir)
        .args(["list", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salário"))
        .stdout(predicate::str::contains("Aluguel"));

    poupe(&dir)
        .args(["summary", "-m", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 700,00"))
        .stdout(predicate::str::contains("70.0%"));
}

#[test]
fn ledger_is_stored_under_financial_data_key() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Luz", "120,50", "-m", "3"]);

    let stored = std::fs::read_to_string(dir.path().join("data").join("financialData.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["2"][0]["name"], "Luz");
    assert_eq!(json["2"][0]["value"], 120.5);
    assert_eq!(json["2"][0]["type"], "expense");
    assert_eq!(json["11"], serde_json::json!([]));
}

#[test]
fn missing_value_is_rejected() {
    let dir = TempDir::new().unwrap();

    poupe(&dir)
        .args(["add", "Salário", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please fill in at least the name and the value.",
        ));

    poupe(&dir)
        .args(["add", "Salário", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    poupe(&dir)
        .args(["add", "Lottery", "50000000000000000", "-t", "income"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed"));
}

#[test]
fn delete_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    poupe(&dir)
        .args(["delete", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found: 123"));
}

#[test]
fn export_and_history() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Mercado", "89,90", "-m", "10", "-d", "Feira"]);

    poupe(&dir)
        .args(["export", "-m", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id,name,description,value,type,date\n"))
        .stdout(predicate::str::contains("Mercado,Feira,89.90,expense"));

    poupe(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE October"));
}

#[test]
fn invalid_month_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    poupe(&dir)
        .args(["list", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month must be between 1 and 12"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    poupe(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Storage key:       financialData"));

    assert!(dir.path().join("config.json").exists());
}
