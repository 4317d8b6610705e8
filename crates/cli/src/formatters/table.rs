//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format output records as tab-separated tables for terminals.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::common::format_missing;
use crate::formatters::{CategoryMatch, CategorySummary, ElementEntry, Formatter};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_categories(&self, categories: &[CategorySummary]) -> Result<String> {
        if categories.is_empty() {
            return Ok("No categories found.".to_string());
        }

        let mut output = String::from("Category\tElements\n");
        for category in categories {
            output.push_str(&format!("{}\t{}\n", category.name, category.element_count));
        }
        Ok(output)
    }

    fn format_search(&self, query: &str, matches: &[CategoryMatch]) -> Result<String> {
        if matches.is_empty() {
            return Ok(format!("No elements match \"{query}\"."));
        }

        let mut output = String::new();
        for category in matches {
            output.push_str(category.name);
            output.push('\n');
            if category.elements.is_empty() {
                output.push_str("  (category name matches; no element matches)\n");
            }
            for element in &category.elements {
                output.push_str(&format!("  {}\t{}\n", element.name, element.description));
            }
        }
        Ok(output)
    }

    fn format_element(&self, element: &ElementEntry) -> Result<String> {
        let mut output = format!(
            "Name: {}\n\
             Category: {}\n\
             Description: {}\n\
             Reference: {}\n\
             Rendered Preview: {}\n\
             Example:\n",
            element.name,
            element.category,
            element.description,
            format_missing(element.reference_url.as_deref()),
            if element.renders_example { "yes" } else { "no" },
        );
        for line in element.example.lines() {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::tests::entry;

    #[test]
    fn test_categories_table() {
        let rows = [CategorySummary {
            name: "Lists",
            element_count: 3,
        }];
        let output = TableFormatter.format_categories(&rows).unwrap();
        assert_eq!(output, "Category\tElements\nLists\t3\n");
    }

    #[test]
    fn test_empty_search_message() {
        let output = TableFormatter.format_search("zzz", &[]).unwrap();
        assert_eq!(output, "No elements match \"zzz\".");
    }

    #[test]
    fn test_category_only_match_is_explained() {
        let matches = [CategoryMatch {
            name: "Lists",
            elements: Vec::new(),
        }];
        let output = TableFormatter.format_search("lists", &matches).unwrap();
        assert!(output.starts_with("Lists\n"));
        assert!(output.contains("no element matches"));
    }

    #[test]
    fn test_element_without_reference() {
        let output = TableFormatter.format_element(&entry("doctype")).unwrap();
        assert!(output.contains("Reference: N/A"));
        assert!(output.contains("Rendered Preview: no"));
        assert!(output.contains("  <!DOCTYPE html>\n"));
    }

    #[test]
    fn test_multiline_example_is_indented() {
        let output = TableFormatter.format_element(&entry("<head>")).unwrap();
        assert!(output.contains("  <head>\n    <title>Page Title</title>\n  </head>\n"));
    }
}
