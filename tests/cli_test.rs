use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/debts.csv")
        .args(["--income", "700", "--expenses", "200"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Week,Card Payment,Loan Payment"))
        .stdout(predicate::str::contains("1,480.00,20.00"))
        .stdout(predicate::str::contains("3,51.41,448.59"))
        .stdout(predicate::str::contains("4,0.00,16.20"));

    Ok(())
}

#[test]
fn test_cli_balances_sheet() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/debts.csv")
        .args(["--income", "700", "--expenses", "200", "--sheet", "balances"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Week,Card Balance After Payment,Loan Balance After Payment",
        ))
        .stdout(predicate::str::contains("1,520.00,480.00"))
        .stdout(predicate::str::contains("2,50.40,462.40"));

    Ok(())
}

#[test]
fn test_cli_totals_in_dollars() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/debts.csv").args([
        "--income", "700", "--expenses", "200", "--sheet", "totals", "--currency", "dollar",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Week,Total Balance"))
        .stdout(predicate::str::contains("1,\"$1,000.00\""))
        .stdout(predicate::str::contains("4,$0.00"));

    Ok(())
}

#[test]
fn test_cli_output_dir_writes_every_sheet() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let mut cmd = Command::new(cargo_bin!());
    cmd.arg("tests/fixtures/debts.csv")
        .args(["--income", "700", "--expenses", "200", "--output-dir"])
        .arg(dir.path());

    cmd.assert().success().stdout(predicate::str::is_empty());

    let payments = std::fs::read_to_string(dir.path().join("payments.csv"))?;
    let balances = std::fs::read_to_string(dir.path().join("balances.csv"))?;
    let totals = std::fs::read_to_string(dir.path().join("totals.csv"))?;

    assert_eq!(payments.lines().count(), 5);
    assert!(balances.contains("3,0.00,16.12"));
    assert!(totals.starts_with("Week,Total Balance\n1,1000.00\n"));

    Ok(())
}
