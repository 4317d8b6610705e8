//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input, building an
//! app over the bundled catalogue and rendering it to a mock terminal.

#![allow(dead_code)]

use cheatsheet_catalogue::CATALOGUE;
use cheatsheet_config::Config;
use cheatsheet_tui::{Action, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Page Down key event.
pub fn page_down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)
}

/// Create a Page Up key event.
pub fn page_up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)
}

/// Create a Home key event.
pub fn home_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)
}

/// Create an End key event.
pub fn end_key() -> KeyEvent {
    KeyEvent::new(KeyCode::End, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a function key event.
pub fn f_key(n: u8) -> KeyEvent {
    KeyEvent::new(KeyCode::F(n), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// App over the bundled catalogue with default settings.
pub fn test_app(expand_all: bool) -> App {
    let config = Config {
        expand_all,
        ..Config::default()
    };
    App::new(config, CATALOGUE)
}

/// Feed a key through input handling and apply the result, the way the
/// event loop does. Returns the action that was produced.
pub fn press(app: &mut App, key: KeyEvent) -> Option<Action> {
    let action = app.handle_input(key)?;
    if action != Action::Quit {
        app.update(action.clone());
    }
    Some(action)
}

/// Type every character of `text`.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, key(c));
    }
}

/// Index of a category by name in the bundled catalogue.
pub fn category_index(name: &str) -> usize {
    CATALOGUE
        .iter()
        .position(|c| c.name == name)
        .unwrap_or_else(|| panic!("no category named {name}"))
}

/// (category index, element index) of an element by name.
pub fn element_index(name: &str) -> (usize, usize) {
    CATALOGUE
        .iter()
        .enumerate()
        .find_map(|(ci, c)| {
            c.elements
                .iter()
                .position(|e| e.name == name)
                .map(|ei| (ci, ei))
        })
        .unwrap_or_else(|| panic!("no element named {name}"))
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    /// Create a new test harness with the given terminal dimensions.
    pub fn new(app: App, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per terminal row.
///
/// Trailing blanks are trimmed from each row so inline snapshots stay
/// readable.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        output.push_str(line.trim_end());
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
