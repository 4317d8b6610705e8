//! Static HTML element catalogue.
//!
//! This crate provides the hand-curated catalogue of HTML elements shown by
//! the cheatsheet frontends, together with the pure search filter and the
//! reference-link derivation shared by the TUI and the CLI.

mod data;
pub mod filter;
pub mod models;
pub mod reference;

pub use data::CATALOGUE;
pub use filter::{SearchQuery, matches_category, matches_element};
pub use models::{Category, Element, ReferenceTarget};
pub use reference::{ReferenceLinker, derive_slug};

/// Returns the full catalogue in display order.
pub fn catalogue() -> &'static [Category] {
    CATALOGUE
}

/// Returns the category names in display order.
pub fn category_names(categories: &[Category]) -> Vec<String> {
    categories.iter().map(|c| c.name.to_string()).collect()
}

/// Finds an element by display name, case-insensitively.
///
/// Angle brackets are optional, so `strong`, `<strong>` and `<STRONG>` all
/// resolve to the same entry. Returns the owning category alongside the
/// element; the first match in display order wins.
pub fn find_element<'a>(
    categories: &'a [Category],
    name: &str,
) -> Option<(&'a Category, &'a Element)> {
    let wanted = derive_slug(name).to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    categories.iter().find_map(|category| {
        category
            .elements
            .iter()
            .find(|e| derive_slug(e.name).to_lowercase() == wanted)
            .map(|e| (category, e))
    })
}
