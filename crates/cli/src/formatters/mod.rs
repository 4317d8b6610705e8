//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the output formats: Table, JSON and CSV.
//! - Define the serializable output records the commands produce.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | CSV | Headers only, no data | `Category,Name,Description,Reference\n` |
//! | Table | Human message | `No elements match "x".` |
//!
//! ## Missing Value Handling
//!
//! Elements without a reference page serialize as `null` in JSON and render
//! as `N/A` in Table and CSV output.

use anyhow::Result;
use cheatsheet_catalogue::{Category, Element, ReferenceLinker};
use serde::Serialize;

use crate::error::CliError;

mod common;
mod csv;
mod json;
mod table;

pub use common::output_result;
pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self, CliError> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(CliError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// One row of the `categories` command.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub element_count: usize,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name,
            element_count: category.elements.len(),
        }
    }
}

/// A full element entry, as shown by `show` and listed by `search`.
#[derive(Debug, Clone, Serialize)]
pub struct ElementEntry {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub renders_example: bool,
    pub reference_url: Option<String>,
}

impl ElementEntry {
    pub fn new(category: &Category, element: &Element, linker: &ReferenceLinker) -> Self {
        Self {
            category: category.name,
            name: element.name,
            description: element.description,
            example: element.example,
            renders_example: element.renders_example(),
            reference_url: linker.url(element),
        }
    }
}

/// A category that survived the search filter, with its matching elements.
///
/// `elements` may be empty when only the category name matched.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMatch {
    pub name: &'static str,
    pub elements: Vec<ElementEntry>,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the category list.
    fn format_categories(&self, categories: &[CategorySummary]) -> Result<String>;

    /// Format search results for `query`.
    fn format_search(&self, query: &str, matches: &[CategoryMatch]) -> Result<String>;

    /// Format a single element entry.
    fn format_element(&self, element: &ElementEntry) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
