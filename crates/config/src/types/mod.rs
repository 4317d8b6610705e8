//! Configuration types.
//!
//! Responsibilities:
//! - Define the resolved runtime `Config`.
//! - Re-export theme types.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader`).

mod theme;

pub use theme::{ColorTheme, Theme};

use crate::constants::DEFAULT_REFERENCE_BASE_URL;

/// Fully resolved configuration shared by the TUI and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selected color theme.
    pub theme: ColorTheme,
    /// Validated http(s) base URL for element reference links, ending in `/`.
    pub reference_base_url: String,
    /// Whether the cheatsheet starts with every category expanded.
    pub expand_all: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            reference_base_url: DEFAULT_REFERENCE_BASE_URL.to_string(),
            expand_all: false,
        }
    }
}
