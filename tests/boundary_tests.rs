use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_duration_bounds() {
    Command::new(cargo_bin!("cardplan"))
        .args(["--months", "36"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nDecember 2026,"));

    for months in ["0", "37"] {
        Command::new(cargo_bin!("cardplan"))
            .args(["--months", months])
            .assert()
            .failure()
            .stderr(predicate::str::contains("between 1 and 36 months"));
    }
}

#[test]
fn test_contribution_count_bounds() {
    let months = [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ];
    let mut cmd = Command::new(cargo_bin!("cardplan"));
    for month in months {
        cmd.arg("--extra").arg(format!("{month} 2024=100"));
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("December 2024,"));

    cmd.args(["--extra", "January 2025=100"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at most 12 extra contributions"));
}

#[test]
fn test_extreme_decimal_precision() {
    let mut cmd = Command::new(cargo_bin!("cardplan"));
    cmd.args([
        "--starting-balance",
        "0.01",
        "--interest-rate",
        "50",
        "--admin-fee",
        "0",
        "--repayment",
        "0",
        "--months",
        "2",
    ]);

    // 0.01 * 0.5 = 0.005 rounds half to even: 0.00
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("January 2024,0.01,0.00,0.00,0.00,0.00,0.01,0.00"));
}

#[test]
fn test_large_balance() {
    let mut cmd = Command::new(cargo_bin!("cardplan"));
    cmd.args([
        "--starting-balance",
        "1000000000000",
        "--interest-rate",
        "1",
        "--admin-fee",
        "0",
        "--repayment",
        "0",
        "--months",
        "1",
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        "January 2024,1000000000000.00,10000000000.00,0.00,0.00,0.00,1010000000000.00,-10000000000.00",
    ));
}

#[test]
fn test_overflowing_balance_is_reported() {
    let mut cmd = Command::new(cargo_bin!("cardplan"));
    cmd.args([
        "--starting-balance",
        "79228162514264337593543950335",
        "--interest-rate",
        "200",
        "--months",
        "1",
    ]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("overflows"))
        .stderr(predicate::str::contains("panicked").not());
}
