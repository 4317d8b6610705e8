//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output records as pretty-printed JSON.

use anyhow::Result;

use crate::formatters::{CategoryMatch, CategorySummary, ElementEntry, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_categories(&self, categories: &[CategorySummary]) -> Result<String> {
        Ok(serde_json::to_string_pretty(categories)?)
    }

    fn format_search(&self, _query: &str, matches: &[CategoryMatch]) -> Result<String> {
        Ok(serde_json::to_string_pretty(matches)?)
    }

    fn format_element(&self, element: &ElementEntry) -> Result<String> {
        Ok(serde_json::to_string_pretty(element)?)
    }
}
