//! Text input component wrappers using tui-input and tui-textarea.
//!
//! `SingleLineInput` backs the search box; `MultiLineInput` backs the HTML
//! and CSS panes of the live preview.

use ratatui::{layout::Rect, style::Style, widgets::Block};
use tui_input::{Input, InputRequest};

/// Single-line input with readline-style shortcuts.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        use crossterm::event::{KeyCode, KeyModifiers};

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('k') => Some(InputRequest::DeleteTillEnd),
                KeyCode::Char('w') | KeyCode::Backspace => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replace the value, leaving the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    /// Horizontal scroll offset that keeps the cursor inside `width` columns.
    pub fn scroll_offset(&self, width: usize) -> usize {
        self.input.visual_scroll(width)
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }
}

impl std::fmt::Display for SingleLineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.input.value())
    }
}

/// Multi-line text area.
pub struct MultiLineInput<'a> {
    textarea: tui_textarea::TextArea<'a>,
}

impl<'a> MultiLineInput<'a> {
    pub fn new() -> Self {
        Self {
            textarea: tui_textarea::TextArea::default(),
        }
    }

    pub fn with_value(value: impl AsRef<str>) -> Self {
        Self {
            textarea: tui_textarea::TextArea::new(split_lines(value.as_ref())),
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        self.textarea.input(key);
    }

    /// Current text, lines joined with `\n`.
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_value(&mut self, value: impl AsRef<str>) {
        // Keep block and styles across replacement
        let block = self.textarea.block().cloned();
        let style = self.textarea.style();
        let cursor_style = self.textarea.cursor_style();

        self.textarea = tui_textarea::TextArea::new(split_lines(value.as_ref()));
        self.textarea.set_style(style);
        self.textarea.set_cursor_style(cursor_style);
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    /// `(row, column)` of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn set_style(&mut self, style: Style) {
        self.textarea.set_style(style);
    }

    pub fn set_block(&mut self, block: Block<'a>) {
        self.textarea.set_block(block);
    }

    pub fn set_cursor_style(&mut self, style: Style) {
        self.textarea.set_cursor_style(style);
    }

    pub fn inner(&self) -> &tui_textarea::TextArea<'a> {
        &self.textarea
    }
}

impl Default for MultiLineInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ratatui::widgets::Widget for &MultiLineInput<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        ratatui::widgets::Widget::render(&self.textarea, area, buf);
    }
}

fn split_lines(value: &str) -> Vec<String> {
    // `split` keeps a trailing empty line that `lines` would drop.
    value.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn char_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn code(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_single_line_insert_and_cursor() {
        let mut input = SingleLineInput::new();
        input.handle_key(char_key('t'));
        input.handle_key(char_key('d'));
        assert_eq!(input.value(), "td");
        assert_eq!(input.cursor_position(), 2);

        input.handle_key(code(KeyCode::Home));
        input.handle_key(char_key('<'));
        assert_eq!(input.value(), "<td");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_single_line_backspace_and_delete() {
        let mut input = SingleLineInput::with_value("strong");
        input.handle_key(code(KeyCode::Backspace));
        assert_eq!(input.value(), "stron");
        input.handle_key(code(KeyCode::Home));
        input.handle_key(code(KeyCode::Delete));
        assert_eq!(input.value(), "tron");
    }

    #[test]
    fn test_single_line_ctrl_shortcuts() {
        let mut input = SingleLineInput::with_value("table row");
        input.handle_key(ctrl('w'));
        assert_eq!(input.value(), "table ");

        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor_position(), 0);
        input.handle_key(ctrl('k'));
        assert!(input.is_empty());

        input.set_value("abc");
        input.handle_key(ctrl('u'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_single_line_ctrl_does_not_insert() {
        let mut input = SingleLineInput::new();
        input.handle_key(ctrl('x'));
        assert!(input.is_empty());
    }

    #[test]
    fn test_multi_line_value_round_trip() {
        let input = MultiLineInput::with_value("p {\n  color: red;\n}");
        assert_eq!(input.value(), "p {\n  color: red;\n}");
        assert_eq!(input.cursor(), (0, 0));
    }

    #[test]
    fn test_multi_line_newline_and_typing() {
        let mut input = MultiLineInput::with_value("<p>");
        input.handle_key(code(KeyCode::End));
        input.handle_key(code(KeyCode::Enter));
        input.handle_key(char_key('x'));
        assert_eq!(input.value(), "<p>\nx");
        assert_eq!(input.cursor(), (1, 1));
    }

    #[test]
    fn test_multi_line_set_value_and_empty() {
        let mut input = MultiLineInput::new();
        assert!(input.is_empty());
        input.set_value("a\n");
        assert_eq!(input.value(), "a\n");
        assert!(!input.is_empty());
    }
}
