//! External reference links for catalogue elements.
//!
//! Responsibilities:
//! - Derive a reference slug from an element display name.
//! - Resolve an element's `ReferenceTarget` against a base URL.
//!
//! Does NOT handle:
//! - Validating the base URL (see `cheatsheet_config`).
//! - Fetching or opening links.
//!
//! Invariants:
//! - `ReferenceTarget::Override` always wins over the derived slug.
//! - `ReferenceTarget::None` never produces a link.

use crate::models::{Element, ReferenceTarget};

/// Derive a slug from a display name by stripping `<`, `>` and `!`.
///
/// `"<strong>"` becomes `"strong"`, `"<!DOCTYPE>"` becomes `"DOCTYPE"`.
pub fn derive_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '<' | '>' | '!'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds reference URLs from a base such as an MDN element index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLinker {
    base: String,
}

impl ReferenceLinker {
    /// Create a linker; a trailing `/` is appended to `base` when missing.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// The slug an element links to, if any.
    pub fn target(&self, element: &Element) -> Option<String> {
        match element.reference {
            ReferenceTarget::Derived => {
                let slug = derive_slug(element.name);
                (!slug.is_empty() && !slug.contains(char::is_whitespace)).then_some(slug)
            }
            ReferenceTarget::Override(slug) => Some(slug.to_string()),
            ReferenceTarget::None => None,
        }
    }

    /// The full reference URL for an element, if it has one.
    pub fn url(&self, element: &Element) -> Option<String> {
        self.target(element)
            .map(|slug| format!("{}{}", self.base, slug))
    }
}
