//! Centralized constants for the HTML cheatsheet workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Runtime Defaults
// =============================================================================

/// UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Capacity of the bounded action channel between the input task and the UI loop.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Number of rows moved by PageUp/PageDown in the element list.
pub const DEFAULT_PAGE_ROWS: usize = 10;

// =============================================================================
// Reference Links
// =============================================================================

/// Base URL that element reference slugs are appended to.
pub const DEFAULT_REFERENCE_BASE_URL: &str =
    "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/";

// =============================================================================
// Logging
// =============================================================================

/// Default directory for TUI log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name prefix for the daily-rolling TUI log.
pub const LOG_FILE_NAME: &str = "html-cheatsheet.log";

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the color theme (`default`, `light`, `dark`, `high_contrast`, `monochrome`).
pub const ENV_THEME: &str = "CHEATSHEET_THEME";

/// Overrides the reference base URL.
pub const ENV_REFERENCE_URL: &str = "CHEATSHEET_REFERENCE_URL";

/// Starts with every category expanded (`true`/`false`).
pub const ENV_EXPAND_ALL: &str = "CHEATSHEET_EXPAND_ALL";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
