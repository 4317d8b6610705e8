//! Action enum definitions.
//!
//! Responsibilities:
//! - Define every state transition the app understands.
//!
//! Does NOT handle:
//! - Applying actions (see `App::update`).
//! - Logging-safe formatting (see `redaction`).

use crossterm::event::{KeyEvent, MouseEvent};

use crate::app::rows::RowKey;
use crate::app::state::Focus;

/// Unified action type.
///
/// Raw terminal events (`Input`, `Mouse`, `Resize`, `Tick`) arrive from the
/// event stream; everything else is produced by the input and mouse handlers
/// and applied synchronously by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    Quit,
    Tick,
    Resize(u16, u16),

    // Raw input
    Input(KeyEvent),
    Mouse(MouseEvent),

    // Search
    /// New raw search text; normalized to lowercase when applied.
    SearchChanged(String),

    // Expansion
    ToggleExpandAll,
    /// Toggle one category by display index.
    ToggleCategory(usize),

    // Cursor
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorHome,
    CursorEnd,
    /// Activate the row under the cursor (toggles category rows).
    ActivateCursor,
    SelectRow(RowKey),

    // Focus
    FocusNext,
    FocusPrev,
    Focus(Focus),

    // Live preview
    ToggleEditor,
    HtmlChanged(String),
    CssChanged(String),

    // Appearance
    CycleTheme,
}
