//! End-to-end tests driving the bitboot binary with piped stdin.
//!
//! All runs use `--speed 0` so no artificial delay is ever slept.

use assert_cmd::Command;
use predicates::prelude::*;

fn bitboot() -> Command {
    let mut cmd = Command::cargo_bin("bitboot").unwrap();
    cmd.args(["--speed", "0", "--no-color", "--no-log"]);
    cmd
}

#[test]
fn test_or_happy_path() {
    bitboot()
        .write_stdin("or\n1010\n0101\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("boot sequence complete"))
        .stdout(predicate::str::contains("1111"))
        .stdout(predicate::str::contains("decimal 15"))
        .stdout(predicate::str::contains("system halted."));
}

#[test]
fn test_not_takes_a_single_operand() {
    bitboot()
        .write_stdin("not\n1100\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0011"))
        .stdout(predicate::str::contains("decimal 3"));
}

#[test]
fn test_mixed_width_operands_are_right_aligned() {
    bitboot()
        .write_stdin("and\n101\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("001"))
        .stdout(predicate::str::contains("decimal 1"));
}

#[test]
fn test_invalid_input_reprompts() {
    bitboot()
        .write_stdin("maybe\nand\n102\n101\n11\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown operation 'maybe'"))
        .stdout(predicate::str::contains("invalid operand '102'"))
        .stdout(predicate::str::contains("decimal 1"));
}

#[test]
fn test_eof_aborts_gracefully() {
    bitboot()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("boot aborted at prompt."));
}

#[test]
fn test_negative_speed_is_rejected() {
    Command::cargo_bin("bitboot")
        .unwrap()
        .args(["--speed=-1", "--no-color", "--no-log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_writes_dated_session_log() {
    let tmp = tempfile::tempdir().unwrap();
    Command::cargo_bin("bitboot")
        .unwrap()
        .args(["--speed", "0", "--no-color", "--log-dir"])
        .arg(tmp.path())
        .write_stdin("xor\n110\n011\n")
        .assert()
        .success();

    let mut entries = std::fs::read_dir(tmp.path()).unwrap();
    let log = entries.next().expect("expected a log file").unwrap();
    let contents = std::fs::read_to_string(log.path()).unwrap();
    assert!(contents.contains("evaluation complete"), "log was: {contents}");
}
