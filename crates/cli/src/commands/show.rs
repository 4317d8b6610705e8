//! Show command implementation.
//!
//! Responsibilities:
//! - Look up one element by name and print its full entry.
//!
//! Invariants:
//! - Name matching is case-insensitive and angle brackets are optional.
//! - An unknown name is a `CliError::ElementNotFound`.

use anyhow::Result;
use cheatsheet_catalogue::{Category, ReferenceLinker, find_element};
use tracing::info;

use crate::error::CliError;
use crate::formatters::{ElementEntry, OutputFormat, get_formatter, output_result};

pub fn lookup(
    categories: &[Category],
    name: &str,
    linker: &ReferenceLinker,
) -> Result<ElementEntry, CliError> {
    let (category, element) = find_element(categories, name)
        .ok_or_else(|| CliError::ElementNotFound(name.trim().to_string()))?;
    Ok(ElementEntry::new(category, element, linker))
}

pub fn run(
    categories: &[Category],
    name: &str,
    linker: &ReferenceLinker,
    format: OutputFormat,
) -> Result<()> {
    let entry = lookup(categories, name, linker)?;
    info!(element = entry.name, category = entry.category, "Showing element");
    let output = get_formatter(format).format_element(&entry)?;
    output_result(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_catalogue::CATALOGUE;

    fn linker() -> ReferenceLinker {
        ReferenceLinker::new("https://example.com/ref/")
    }

    #[test]
    fn test_lookup_is_case_and_bracket_insensitive() {
        for name in ["table", "<table>", "TABLE", " <Table> "] {
            let entry = lookup(CATALOGUE, name, &linker()).unwrap();
            assert_eq!(entry.name, "<table>");
        }
    }

    #[test]
    fn test_lookup_uses_configured_base() {
        let entry = lookup(CATALOGUE, "strong", &linker()).unwrap();
        assert_eq!(
            entry.reference_url.as_deref(),
            Some("https://example.com/ref/strong")
        );
    }

    #[test]
    fn test_unknown_name() {
        let err = lookup(CATALOGUE, "blink", &linker()).unwrap_err();
        assert!(matches!(err, CliError::ElementNotFound(n) if n == "blink"));
    }
}
