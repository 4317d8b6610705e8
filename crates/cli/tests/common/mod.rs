//! Shared test utilities for html-cheatsheet integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;

/// Returns a hermetic `html-cheatsheet` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `CHEATSHEET_*` variables from the host are cleared.
pub fn cheatsheet_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("html-cheatsheet");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("CHEATSHEET_THEME")
        .env_remove("CHEATSHEET_REFERENCE_URL")
        .env_remove("CHEATSHEET_EXPAND_ALL")
        .env_remove("RUST_LOG");

    cmd
}
