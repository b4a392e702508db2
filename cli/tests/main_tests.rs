//! # chatrs CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `chatrs` binary: standard flags, subcommand
//! help and argument errors.
//!

mod common;
use common::chatrs_cmd;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    chatrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    let output = chatrs_cmd().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["chat", "window", "catalog", "reply", "classify", "summary"] {
        assert!(stdout.contains(name), "help is missing '{name}'");
    }
}

#[test]
fn test_subcommand_help() {
    chatrs_cmd()
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--transcript"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--catalog"));

    chatrs_cmd()
        .args(["window", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--grace-ms"));
}

#[test]
fn test_missing_subcommand_fails() {
    chatrs_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails() {
    chatrs_cmd()
        .arg("dance")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
