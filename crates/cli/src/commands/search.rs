//! Search command implementation.
//!
//! Responsibilities:
//! - Apply the same filter as the TUI to the whole catalogue.
//! - Report each visible category with its visible elements.
//!
//! Does NOT handle:
//! - Expansion; every visible element is reported.
//!
//! Invariants:
//! - An empty query reports the full catalogue.
//! - An element is reported iff it matches on its own.

use anyhow::Result;
use cheatsheet_catalogue::{
    Category, ReferenceLinker, SearchQuery, matches_category, matches_element,
};
use tracing::info;

use crate::formatters::{
    CategoryMatch, ElementEntry, OutputFormat, get_formatter, output_result,
};

pub fn search(
    categories: &[Category],
    query: &SearchQuery,
    linker: &ReferenceLinker,
) -> Vec<CategoryMatch> {
    categories
        .iter()
        .filter(|category| matches_category(category, query))
        .map(|category| CategoryMatch {
            name: category.name,
            elements: category
                .elements
                .iter()
                .filter(|element| matches_element(element, query))
                .map(|element| ElementEntry::new(category, element, linker))
                .collect(),
        })
        .collect()
}

pub fn run(
    categories: &[Category],
    raw_query: &str,
    linker: &ReferenceLinker,
    format: OutputFormat,
) -> Result<()> {
    let query = SearchQuery::new(raw_query);
    let matches = search(categories, &query, linker);
    info!(
        query = query.as_str(),
        categories = matches.len(),
        elements = matches.iter().map(|m| m.elements.len()).sum::<usize>(),
        "Search complete"
    );
    let output = get_formatter(format).format_search(raw_query, &matches)?;
    output_result(&output)
}
