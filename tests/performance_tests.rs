use assert_cmd::cargo_bin;
use std::process::Command;

mod common;

#[test]
fn test_many_debts_long_schedule() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("many_debts.csv");
    common::generate_debts_csv(&input, 500).expect("Failed to generate CSV");

    let status = Command::new(cargo_bin!("payoff"))
        .arg(&input)
        .args(["--income", "120000", "--expenses", "20000", "--output-dir"])
        .arg(dir.path())
        .status()
        .expect("Failed to execute command");
    assert!(status.success(), "Binary failed to pay off 500 debts");

    let mut reader = csv::Reader::from_path(dir.path().join("totals.csv")).expect("Failed to open totals");
    let last = reader
        .records()
        .last()
        .expect("Totals sheet is empty")
        .expect("Failed to read record");
    assert_eq!(&last[1], "0.00");
}
