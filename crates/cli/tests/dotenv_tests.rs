//! Tests for `.env` loading around the CLI.
//!
//! Invariants / assumptions:
//! - The CLI loads dotenv before clap parsing.
//! - `DOTENV_DISABLED` ("true" or "1") skips loading entirely.

mod common;

use common::cheatsheet_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn write_env(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join(".env"), contents).unwrap();
}

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = TempDir::new().unwrap();
    write_env(&temp_dir, "CHEATSHEET_REFERENCE_URL=https://dotenv.example.com/\n");

    cheatsheet_cmd()
        .current_dir(temp_dir.path())
        .args(["show", "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dotenv.example.com").not());
}

#[test]
fn test_dotenv_enabled_loads_env_file() {
    let temp_dir = TempDir::new().unwrap();
    write_env(&temp_dir, "CHEATSHEET_REFERENCE_URL=https://dotenv.example.com/\n");

    cheatsheet_cmd()
        .env_remove("DOTENV_DISABLED")
        .current_dir(temp_dir.path())
        .args(["show", "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference: https://dotenv.example.com/p"));
}

#[test]
fn test_malformed_dotenv_is_general_error() {
    let temp_dir = TempDir::new().unwrap();
    write_env(&temp_dir, "SECRET_LINE_WITHOUT_EQUALS 'unterminated\n");

    cheatsheet_cmd()
        .env_remove("DOTENV_DISABLED")
        .current_dir(temp_dir.path())
        .arg("categories")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("SECRET_LINE").not());
}
