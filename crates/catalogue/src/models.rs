//! Catalogue data model.
//!
//! Responsibilities:
//! - Define the immutable `Category` and `Element` records.
//! - Define how an element maps to an external reference page.
//!
//! Does NOT handle:
//! - Filtering (see `filter`).
//! - Building reference URLs (see `reference`).
//!
//! Invariants:
//! - Every value is `'static` and never mutated after load.
//! - Category names are unique across the catalogue.
//! - Element names are unique within their category.

use serde::Serialize;

/// How an element links to its external reference page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "slug")]
pub enum ReferenceTarget {
    /// Slug derived from the display name by stripping `<`, `>` and `!`.
    #[default]
    Derived,
    /// Explicit slug for names that do not map onto a single element page.
    Override(&'static str),
    /// The element has no reference page.
    None,
}

/// One documented HTML element entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Display label, may contain angle brackets (e.g. `<p>`).
    pub name: &'static str,
    pub description: &'static str,
    /// Example markup, shown literally and (unless suppressed) rendered.
    pub example: &'static str,
    /// When set, only the literal example is shown, never a rendered preview.
    pub should_not_render_example: bool,
    #[serde(skip)]
    pub reference: ReferenceTarget,
}

impl Element {
    /// Create an element whose example is rendered and whose reference is derived.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        example: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            example,
            should_not_render_example: false,
            reference: ReferenceTarget::Derived,
        }
    }

    /// Suppress the rendered preview of the example.
    pub const fn without_preview(mut self) -> Self {
        self.should_not_render_example = true;
        self
    }

    /// Replace the reference target.
    pub const fn with_reference(mut self, reference: ReferenceTarget) -> Self {
        self.reference = reference;
        self
    }

    /// Whether the example should be rendered as live markup.
    pub fn renders_example(&self) -> bool {
        !self.should_not_render_example
    }
}

/// A named group of related elements, displayed in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub elements: &'static [Element],
}
