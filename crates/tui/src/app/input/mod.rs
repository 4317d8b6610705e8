//! Keyboard input handling.
//!
//! Responsibilities:
//! - Translate key presses into `Action`s according to the focused widget.
//! - Feed text-editing keys to the focused input component.
//!
//! Does NOT handle:
//! - Applying the resulting actions (see `App::update`).
//! - Mouse input (see `app::mouse`).
//!
//! Invariants:
//! - Global keys (Ctrl+C, Tab, Shift+Tab, F2, F3, Esc) work in every focus.
//! - Plain character keys never trigger list shortcuts while a text input
//!   has focus.

pub mod components;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::state::Focus;

impl App {
    /// Handle a key press. Returns the action to apply, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(action) = self.handle_global_key(key) {
            return Some(action);
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::List => self.handle_list_key(key),
            Focus::Html | Focus::Css => self.handle_editor_key(key),
        }
    }

    fn handle_global_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::F(2) => Some(Action::ToggleExpandAll),
            KeyCode::F(3) => Some(Action::ToggleEditor),
            KeyCode::Esc if self.focus != Focus::List => Some(Action::Focus(Focus::List)),
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Down => Some(Action::Focus(Focus::List)),
            _ => {
                let before = self.search_input.value().to_string();
                self.search_input.handle_key(key);
                let after = self.search_input.value();
                (after != before).then(|| Action::SearchChanged(after.to_string()))
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('d') => Some(Action::PageDown),
                KeyCode::Char('u') => Some(Action::PageUp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('/') => Some(Action::Focus(Focus::Search)),
            KeyCode::Char('a') => Some(Action::ToggleExpandAll),
            KeyCode::Char('p') => Some(Action::ToggleEditor),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::CursorHome),
            KeyCode::End | KeyCode::Char('G') => Some(Action::CursorEnd),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
            _ => None,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) -> Option<Action> {
        let pane = self.editor_pane()?;
        let changed = self.editor.handle_key(pane, key)?;
        Some(match self.focus {
            Focus::Css => Action::CssChanged(changed),
            _ => Action::HtmlChanged(changed),
        })
    }
}
