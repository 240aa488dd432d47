// Integration tests for the fibseq binary

use assert_cmd::Command;
use predicates::prelude::*;

fn fibseq() -> Command {
    Command::cargo_bin("fibseq").unwrap()
}

#[test]
fn test_order_two_prints_literal_sequence() {
    fibseq()
        .args(["5", "2"])
        .assert()
        .success()
        .stdout("1, 1, 2, 3, 5\n");
}

#[test]
fn test_order_four_sequence() {
    fibseq()
        .args(["6", "4"])
        .assert()
        .success()
        .stdout("1, 1, 4, 7, 13, 25\n");
}

#[test]
fn test_include_seeds() {
    fibseq()
        .args(["--include-seeds", "5", "3"])
        .assert()
        .success()
        .stdout("1, 1, 1, 3, 5\n");
}

#[test]
fn test_single_term_has_no_separator() {
    fibseq().args(["1", "2"]).assert().success().stdout("1\n");
}

#[test]
fn test_missing_arguments() {
    let message =
        "Not enough parameters. Please specify the count of Fibonacci numbers and the order!\n";

    fibseq()
        .assert()
        .code(1)
        .stdout(message)
        .stderr(predicate::str::is_empty());

    fibseq().arg("10").assert().code(1).stdout(message);
}

#[test]
fn test_order_below_minimum() {
    for order in ["0", "1"] {
        fibseq()
            .args(["10", order])
            .assert()
            .code(1)
            .stdout(format!("The minimum order allowed is 2! (got {})\n", order))
            .stderr(predicate::str::is_empty());
    }
}

#[test]
fn test_zero_count() {
    fibseq()
        .args(["0", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("at least 1"));
}

#[test]
fn test_huge_order_does_not_allocate_window() {
    fibseq()
        .args(["1", "1000000000000"])
        .assert()
        .success()
        .stdout("1\n");

    fibseq()
        .args(["3", "1000000000000"])
        .assert()
        .success()
        .stdout("1, 1, 1000000000000\n");
}

#[test]
fn test_expression_arguments_rejected() {
    fibseq()
        .args(["2+3", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_overflow_reported() {
    fibseq()
        .args(["500", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("does not fit into 128 bits"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_help() {
    fibseq()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
