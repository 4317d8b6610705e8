//! Case-insensitive substring search over the catalogue.
//!
//! Responsibilities:
//! - Normalize a raw search string into a `SearchQuery`.
//! - Decide whether a category or element matches a query.
//!
//! Does NOT handle:
//! - Hiding or removing rows (the view marks non-matches hidden).
//! - Tokenization or fuzzy matching; matching is pure substring containment.
//!
//! Invariants:
//! - An empty query matches everything.
//! - Element visibility depends only on the element itself, never on siblings.

use crate::models::{Category, Element};

/// A lowercased search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize a raw query by lowercasing it. Whitespace is kept as typed.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `haystack` contains the query, ignoring case.
    pub fn found_in(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if the element's name or description contains the query.
pub fn matches_element(element: &Element, query: &SearchQuery) -> bool {
    query.found_in(element.name) || query.found_in(element.description)
}

/// True if the category's name, or any of its elements, matches the query.
pub fn matches_category(category: &Category, query: &SearchQuery) -> bool {
    query.found_in(category.name)
        || category
            .elements
            .iter()
            .any(|element| matches_element(element, query))
}
