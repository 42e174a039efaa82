//! Black-box tests of the pomoclock argument surface.
//!
//! The TUI itself needs a terminal, so these only exercise paths that
//! clap resolves before the interface starts.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_controls() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--session"))
        .stdout(predicate::str::contains("--break"))
        .stdout(predicate::str::contains("--mute"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomoclock"));
}

#[test]
fn test_session_length_below_range_is_rejected() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.args(["--session", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1..=60"));
}

#[test]
fn test_session_length_above_range_is_rejected() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.args(["--session", "61"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1..=60"));
}

#[test]
fn test_break_length_out_of_range_is_rejected() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.args(["--break", "61"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1..=60"));
}

#[test]
fn test_non_numeric_length_is_rejected() {
    let mut cmd = Command::cargo_bin("pomoclock").unwrap();
    cmd.args(["--session", "lots"]).assert().failure();
}
