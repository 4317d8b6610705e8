//! Markup interpretation for terminal previews.
//!
//! HTML is tokenized, CSS is parsed into compound-selector rules, and the
//! renderer lays both out as styled `ratatui` text. `surface` adds the
//! scoped style-block resource used by the live preview.

pub mod css;
pub mod html;
pub mod render;
pub mod style;
pub mod surface;

pub use css::Stylesheet;
pub use render::render_markup;
pub use surface::{PreviewSurface, StyleBlockId, StyleGuard};
