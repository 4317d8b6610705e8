//! Shared screen layout.
//!
//! Rendering and mouse hit-testing both derive their rectangles from
//! `AppLayout::calculate`, so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::app::state::{
    EDITOR_COLLAPSED_HEIGHT, EXPAND_BUTTON_WIDTH, FOOTER_HEIGHT, HEADER_HEIGHT, TOOLBAR_HEIGHT,
};

/// Share of the body given to the open editor panel.
const EDITOR_EXPANDED_PERCENT: u16 = 50;

/// Areas of the live preview panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorLayout {
    /// The clickable "HTML Editor ▶" line.
    pub header: Rect,
    pub html: Option<Rect>,
    pub css: Option<Rect>,
    pub preview: Option<Rect>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub expand_button: Rect,
    pub list: Rect,
    pub editor: EditorLayout,
    pub footer: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect, editor_expanded: bool) -> Self {
        let editor_constraint = if editor_expanded {
            Constraint::Percentage(EDITOR_EXPANDED_PERCENT)
        } else {
            Constraint::Length(EDITOR_COLLAPSED_HEIGHT)
        };
        let [header, toolbar, list, editor, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(1),
            editor_constraint,
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let [search, expand_button] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(EXPAND_BUTTON_WIDTH)])
                .areas(toolbar);

        Self {
            header,
            search,
            expand_button,
            list,
            editor: EditorLayout::calculate(editor, editor_expanded),
            footer,
        }
    }
}

impl EditorLayout {
    fn calculate(area: Rect, expanded: bool) -> Self {
        let [header, body] =
            Layout::vertical([Constraint::Length(EDITOR_COLLAPSED_HEIGHT), Constraint::Min(0)])
                .areas(area);
        if !expanded || body.height == 0 {
            return Self {
                header,
                ..Self::default()
            };
        }

        let [sources, preview] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);
        let [html, css] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(sources);

        Self {
            header,
            html: Some(html),
            css: Some(css),
            preview: Some(preview),
        }
    }
}

/// Whether the cell at `(column, row)` lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}
