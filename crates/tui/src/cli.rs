//! Command-line argument parsing for cheatsheet-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `cheatsheet_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use std::path::PathBuf;

use cheatsheet_config::ColorTheme;
use cheatsheet_config::constants::DEFAULT_LOG_DIR;
use clap::Parser;

/// Command-line arguments for cheatsheet-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --reference-url)
/// 2. Environment variables (e.g., CHEATSHEET_THEME)
/// 3. `.env` file
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "cheatsheet-tui",
    about = "Interactive HTML element cheatsheet for the terminal",
    version,
    after_help = "Examples:\n  cheatsheet-tui\n  cheatsheet-tui --query table --expand-all\n  cheatsheet-tui --theme high_contrast --no-mouse\n  cheatsheet-tui --log-dir /tmp/cheatsheet-logs\n"
)]
pub struct Cli {
    /// Start with this search text
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Start with every category expanded
    #[arg(long)]
    pub expand_all: bool,

    /// Color theme (default, light, dark, high_contrast, monochrome)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ColorTheme>,

    /// Base URL for element reference links
    #[arg(long)]
    pub reference_url: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

fn parse_theme(value: &str) -> Result<ColorTheme, String> {
    value.parse()
}
