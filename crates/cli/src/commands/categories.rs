//! Categories command implementation.
//!
//! Responsibilities:
//! - List every category with its element count, in display order.

use anyhow::Result;
use cheatsheet_catalogue::Category;
use tracing::info;

use crate::formatters::{CategorySummary, OutputFormat, get_formatter, output_result};

pub fn summarize(categories: &[Category]) -> Vec<CategorySummary> {
    categories.iter().map(CategorySummary::from).collect()
}

pub fn run(categories: &[Category], format: OutputFormat) -> Result<()> {
    info!("Listing categories");
    let summaries = summarize(categories);
    let output = get_formatter(format).format_categories(&summaries)?;
    output_result(&output)
}
