//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate the output format; that is a validation error with
//!   its own exit code rather than a clap usage error.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "html-cheatsheet")]
#[command(about = "HTML Cheatsheet - Look up HTML elements from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  html-cheatsheet categories\n  html-cheatsheet search strong\n  html-cheatsheet show '<table>' -o json\n  html-cheatsheet search list -o csv\n"
)]
pub struct Cli {
    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Base URL that element reference slugs are appended to
    #[arg(long, global = true, value_name = "URL")]
    pub reference_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List categories with their element counts
    Categories,

    /// Show the categories and elements matching a query
    Search {
        /// Case-insensitive text matched against names and descriptions
        query: String,
    },

    /// Show one element's full entry
    Show {
        /// Element name, with or without angle brackets (e.g. `strong`, `<p>`)
        name: String,
    },
}
