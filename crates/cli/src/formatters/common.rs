//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing value handling.
//! - Writing formatted output to stdout.

use anyhow::Result;
use std::io::Write;

/// String representation for missing values in Table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Format an optional string value, using the default missing value if None.
pub fn format_missing(opt: Option<&str>) -> &str {
    opt.unwrap_or(DEFAULT_MISSING_VALUE)
}

/// Print formatted output, ending with exactly one newline.
pub fn output_result(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
