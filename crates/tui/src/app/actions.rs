//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply every `Action` to `App` state synchronously.
//! - Re-run the view sync (expansion rule, rows, cursor) after each one.
//!
//! Does NOT handle:
//! - Translating raw key or mouse events (see `input` and `mouse`).

use cheatsheet_config::Theme;

use crate::action::{Action, RedactedAction};
use crate::app::App;
use crate::app::editor::EditorPane;
use crate::app::state::Focus;

impl App {
    /// Apply one action.
    pub fn update(&mut self, action: Action) {
        if !matches!(action, Action::Tick) {
            tracing::debug!(action = ?RedactedAction(&action), "Applying action");
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Tick => {}
            Action::Resize(width, height) => {
                self.last_area.width = width;
                self.last_area.height = height;
            }
            // Raw events are translated by the event loop before reaching here
            Action::Input(_) | Action::Mouse(_) => {}

            Action::SearchChanged(raw) => {
                if self.search_input.value() != raw {
                    self.search_input.set_value(raw.as_str());
                }
                self.set_query(&raw);
            }

            Action::ToggleExpandAll => self.expand_all = !self.expand_all,
            Action::ToggleCategory(index) => self.toggle_category(index),

            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-(self.page_rows() as isize)),
            Action::PageDown => self.move_cursor(self.page_rows() as isize),
            Action::CursorHome => self.cursor_home(),
            Action::CursorEnd => self.cursor_end(),
            Action::ActivateCursor => self.activate_cursor(),
            Action::SelectRow(key) => self.select_row(key),

            Action::FocusNext => self.focus = self.focus.next(self.editor.is_expanded()),
            Action::FocusPrev => self.focus = self.focus.prev(self.editor.is_expanded()),
            Action::Focus(focus) => self.set_focus(focus),

            Action::ToggleEditor => {
                self.editor.toggle_expanded();
                if !self.editor.is_expanded() && self.focus.is_editor() {
                    self.focus = Focus::List;
                }
            }
            Action::HtmlChanged(html) => self.editor.set_html(html),
            Action::CssChanged(css) => self.editor.set_css(css),

            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                self.editor.set_theme(self.theme);
                tracing::info!(theme = self.color_theme.key(), "Switched theme");
            }
        }

        self.sync_view();
    }

    fn set_focus(&mut self, focus: Focus) {
        // Editor panes are only reachable while the editor is open
        if focus.is_editor() && !self.editor.is_expanded() {
            self.editor.toggle_expanded();
        }
        self.focus = focus;
    }

    pub(crate) fn editor_pane(&self) -> Option<EditorPane> {
        match self.focus {
            Focus::Html => Some(EditorPane::Html),
            Focus::Css => Some(EditorPane::Css),
            Focus::Search | Focus::List => None,
        }
    }
}
