//! HTML Cheatsheet CLI - look up HTML elements from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve configuration and run one catalogue command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Catalogue data or filtering (see `cheatsheet_catalogue`).
//! - Interactive browsing (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use cheatsheet_config::{Config, ConfigLoader};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    run_command(cli, &config)
}

/// Environment first, then CLI overrides (highest priority).
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;
    if let Some(ref url) = cli.reference_url {
        loader = loader.with_reference_base_url(url.clone());
    }
    loader.build().context("Failed to build configuration")
}
