//! # chatrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the `chatrs` binary inside its own temporary directory with `HOME` and
//! the XDG config dir pointed into it, so no real user or project
//! configuration leaks into a test run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// A temporary working directory that also acts as a repository root, which
/// stops the project config search from walking above it.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// `chatrs` running inside `dir` with an isolated home directory.
pub fn chatrs_in(dir: &Path) -> Command {
    let mut cmd = chatrs_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Like `chatrs_in`, but a plain `std::process::Command` for tests that
/// need the running child (its pid and live pipes).
pub fn chatrs_process_in(dir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin("chatrs"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a custom catalog file into `dir` and returns its path.
pub fn write_catalog(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("catalog.toml");
    fs::write(&path, content).expect("Failed to write catalog file");
    path
}

/// Parses a transcript file written by the binary.
pub fn read_transcript(path: &Path) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(path).expect("Transcript file missing");
    serde_json::from_str(&content).expect("Transcript is not a JSON array")
}

pub const SMALL_CATALOG: &str = r#"
[[intents]]
name = "coffee"
replies = ["I run on espresso."]
keywords = ["coffee", "espresso"]

[[intents]]
name = "default"
replies = ["Ask me about coffee."]
"#;
