//! Command dispatch logic.
//!
//! Responsibilities:
//! - Validate the global output format.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use cheatsheet_catalogue::{ReferenceLinker, catalogue};
use cheatsheet_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, config: &Config) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let linker = ReferenceLinker::new(config.reference_base_url.clone());
    let categories = catalogue();

    match cli.command {
        Commands::Categories => commands::categories::run(categories, format)?,
        Commands::Search { query } => commands::search::run(categories, &query, &linker, format)?,
        Commands::Show { name } => commands::show::run(categories, &name, &linker, format)?,
    }
    Ok(())
}
