//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Handle scroll events over the list.
//! - Handle clicks on the expand-all button, the editor header, the text
//!   inputs and list rows.
//!
//! Does NOT handle:
//! - Keyboard input.
//! - Rendering. Hit-testing reuses `AppLayout` and the row hitboxes recorded
//!   by the last draw.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::layout::hit;
use crate::app::{App, RowKey};
use crate::app::state::Focus;

impl App {
    /// Handle mouse input. Returns the action to apply, if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::CursorUp),
            MouseEventKind::ScrollDown => Some(Action::CursorDown),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn handle_click(&self, column: u16, row: u16) -> Option<Action> {
        let layout = self.current_layout();

        if hit(layout.expand_button, column, row) {
            return Some(Action::ToggleExpandAll);
        }
        if hit(layout.search, column, row) {
            return Some(Action::Focus(Focus::Search));
        }
        if hit(layout.editor.header, column, row) {
            return Some(Action::ToggleEditor);
        }
        if layout.editor.html.is_some_and(|r| hit(r, column, row)) {
            return Some(Action::Focus(Focus::Html));
        }
        if layout.editor.css.is_some_and(|r| hit(r, column, row)) {
            return Some(Action::Focus(Focus::Css));
        }
        if hit(layout.list, column, row) {
            return self.handle_list_click(row);
        }
        None
    }

    fn handle_list_click(&self, row: u16) -> Option<Action> {
        let hitbox = self
            .row_hitboxes
            .iter()
            .find(|h| row >= h.top && row < h.bottom)?;
        Some(match hitbox.key {
            RowKey::Category(index) => Action::ToggleCategory(index),
            key => Action::SelectRow(key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RowHitbox;
    use cheatsheet_catalogue::CATALOGUE;
    use cheatsheet_config::Config;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(Config::default(), CATALOGUE);
        app.last_area = Rect::new(0, 0, 80, 24);
        app
    }

    #[test]
    fn test_click_expand_button() {
        let mut app = app();
        let button = app.current_layout().expand_button;
        assert_eq!(
            app.handle_mouse(click(button.x + 1, button.y + 1)),
            Some(Action::ToggleExpandAll)
        );
    }

    #[test]
    fn test_click_editor_header() {
        let mut app = app();
        let header = app.current_layout().editor.header;
        assert_eq!(
            app.handle_mouse(click(header.x, header.y)),
            Some(Action::ToggleEditor)
        );
    }

    #[test]
    fn test_click_rows_uses_hitboxes() {
        let mut app = app();
        let list = app.current_layout().list;
        app.row_hitboxes = vec![
            RowHitbox { key: RowKey::Category(0), top: list.y + 1, bottom: list.y + 2 },
            RowHitbox { key: RowKey::Element(0, 0), top: list.y + 2, bottom: list.y + 6 },
        ];
        assert_eq!(app.handle_mouse(click(5, list.y + 1)), Some(Action::ToggleCategory(0)));
        assert_eq!(
            app.handle_mouse(click(5, list.y + 4)),
            Some(Action::SelectRow(RowKey::Element(0, 0)))
        );
        assert_eq!(app.handle_mouse(click(5, list.y + 7)), None);
    }

    #[test]
    fn test_scroll_moves_cursor() {
        let mut app = app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(app.handle_mouse(scroll), Some(Action::CursorDown));
    }
}
