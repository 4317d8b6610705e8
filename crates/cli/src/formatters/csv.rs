//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Format output records as RFC 4180 compliant CSV via the `csv` crate.
//! - Flatten search results into one row per element.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::{Context, Result};

use crate::formatters::common::format_missing;
use crate::formatters::{CategoryMatch, CategorySummary, ElementEntry, Formatter};

/// CSV formatter.
pub struct CsvFormatter;

fn write_records<I, R>(header: &[&str], records: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

impl Formatter for CsvFormatter {
    fn format_categories(&self, categories: &[CategorySummary]) -> Result<String> {
        write_records(
            &["Category", "Elements"],
            categories
                .iter()
                .map(|c| [c.name.to_string(), c.element_count.to_string()]),
        )
    }

    fn format_search(&self, _query: &str, matches: &[CategoryMatch]) -> Result<String> {
        let mut rows: Vec<[String; 4]> = Vec::new();
        for category in matches {
            if category.elements.is_empty() {
                // Category matched by name only; keep it visible with empty element fields
                rows.push([
                    category.name.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]);
            }
            for element in &category.elements {
                rows.push([
                    category.name.to_string(),
                    element.name.to_string(),
                    element.description.to_string(),
                    format_missing(element.reference_url.as_deref()).to_string(),
                ]);
            }
        }
        write_records(&["Category", "Name", "Description", "Reference"], rows)
    }

    fn format_element(&self, element: &ElementEntry) -> Result<String> {
        write_records(
            &[
                "Category",
                "Name",
                "Description",
                "Reference",
                "RendersExample",
                "Example",
            ],
            [[
                element.category.to_string(),
                element.name.to_string(),
                element.description.to_string(),
                format_missing(element.reference_url.as_deref()).to_string(),
                element.renders_example.to_string(),
                element.example.to_string(),
            ]],
        )
    }
}
