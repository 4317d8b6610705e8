//! UI rendering modules for the TUI.
//!
//! Screen renderers take plain data and a theme; state lives in `app`.

pub mod screens;
pub mod theme;

pub use theme::ThemeExt;
