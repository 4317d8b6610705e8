//! Integration tests for structured exit codes.
//!
//! These tests verify that html-cheatsheet returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::cheatsheet_cmd;
use predicates::prelude::*;

#[test]
fn test_success_returns_exit_code_0() {
    cheatsheet_cmd().arg("categories").assert().code(0);
}

#[test]
fn test_unknown_element_returns_exit_code_4() {
    cheatsheet_cmd()
        .args(["show", "blink"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No element named 'blink'"));
}

#[test]
fn test_bad_output_format_returns_exit_code_5() {
    cheatsheet_cmd()
        .args(["categories", "-o", "xml"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid output format: xml"));
}

#[test]
fn test_bad_reference_url_returns_exit_code_5() {
    cheatsheet_cmd()
        .args(["categories", "--reference-url", "ftp://example.com"])
        .assert()
        .code(5);
}

#[test]
fn test_bad_env_value_returns_exit_code_5() {
    cheatsheet_cmd()
        .env("CHEATSHEET_EXPAND_ALL", "sometimes")
        .arg("categories")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("CHEATSHEET_EXPAND_ALL"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    // clap reports usage errors itself
    cheatsheet_cmd().assert().code(2);
}
