//! Live HTML/CSS preview widget state.
//!
//! Responsibilities:
//! - Own the HTML and CSS text areas and the preview surface.
//! - Rebuild the preview whenever either text changes.
//! - Keep exactly one style block attached for the current CSS.
//!
//! Does NOT handle:
//! - Drawing (see `ui::screens::editor`).
//! - Anything about the cheatsheet list; this widget shares no state with it.
//!
//! Invariants:
//! - `expanded` starts `false` and only `toggle_expanded` changes it.
//! - After any sequence of CSS edits exactly one style block is attached.
//!   The previous guard is released before the replacement is injected.
//! - Dropping the widget detaches its block.

use cheatsheet_config::Theme;
use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;

use crate::app::input::components::MultiLineInput;
use crate::markup::{PreviewSurface, StyleGuard};

/// Initial HTML source.
pub const DEFAULT_HTML: &str = "<p>Hello, <strong>world</strong>!</p>";
/// Initial CSS source.
pub const DEFAULT_CSS: &str = "p { color: blue; }";

/// Which text area a key goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPane {
    Html,
    Css,
}

pub struct LivePreview {
    html_input: MultiLineInput<'static>,
    css_input: MultiLineInput<'static>,
    html: String,
    css: String,
    expanded: bool,
    theme: Theme,
    preview: Text<'static>,
    // Field order matters: the guard must drop before the surface.
    style: Option<StyleGuard>,
    surface: PreviewSurface,
}

impl LivePreview {
    pub fn new(theme: Theme) -> Self {
        let mut editor = Self {
            html_input: MultiLineInput::with_value(DEFAULT_HTML),
            css_input: MultiLineInput::with_value(DEFAULT_CSS),
            html: DEFAULT_HTML.to_string(),
            css: DEFAULT_CSS.to_string(),
            expanded: false,
            theme,
            preview: Text::default(),
            style: None,
            surface: PreviewSurface::new(),
        };
        editor.apply_input_style();
        editor.inject_css();
        editor.rebuild();
        editor
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn preview(&self) -> &Text<'static> {
        &self.preview
    }

    pub fn html_input(&self) -> &MultiLineInput<'static> {
        &self.html_input
    }

    pub fn css_input(&self) -> &MultiLineInput<'static> {
        &self.css_input
    }

    /// Style blocks currently attached to the preview surface.
    pub fn active_style_blocks(&self) -> usize {
        self.surface.active_blocks()
    }

    /// Feed a key to one text area. Returns the new text if it changed.
    pub fn handle_key(&mut self, pane: EditorPane, key: KeyEvent) -> Option<String> {
        let (input, current) = match pane {
            EditorPane::Html => (&mut self.html_input, &self.html),
            EditorPane::Css => (&mut self.css_input, &self.css),
        };
        input.handle_key(key);
        let value = input.value();
        (value != *current).then_some(value)
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        let html = html.into();
        if html == self.html {
            return;
        }
        if self.html_input.value() != html {
            self.html_input.set_value(&html);
        }
        self.html = html;
        self.rebuild();
    }

    pub fn set_css(&mut self, css: impl Into<String>) {
        let css = css.into();
        if css == self.css {
            return;
        }
        if self.css_input.value() != css {
            self.css_input.set_value(&css);
        }
        self.css = css;
        self.inject_css();
        self.rebuild();
    }

    /// Show the text cursor only in `active`.
    pub fn set_active_pane(&mut self, active: Option<EditorPane>) {
        let cursor = Style::default().add_modifier(Modifier::REVERSED);
        let (html, css) = match active {
            Some(EditorPane::Html) => (cursor, Style::default()),
            Some(EditorPane::Css) => (Style::default(), cursor),
            None => (Style::default(), Style::default()),
        };
        self.html_input.set_cursor_style(html);
        self.css_input.set_cursor_style(css);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.apply_input_style();
        self.rebuild();
    }

    fn apply_input_style(&mut self) {
        let style = Style::default().fg(self.theme.text);
        self.html_input.set_style(style);
        self.css_input.set_style(style);
    }

    fn inject_css(&mut self) {
        // Release first so two blocks are never attached at once.
        drop(self.style.take());
        self.style = Some(self.surface.inject(&self.css));
    }

    fn rebuild(&mut self) {
        self.preview = self.surface.render(&self.html, &self.theme);
        tracing::trace!(
            html_len = self.html.len(),
            css_len = self.css.len(),
            lines = self.preview.lines.len(),
            "Rebuilt live preview"
        );
    }
}

impl std::fmt::Debug for LivePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivePreview")
            .field("html", &self.html)
            .field("css", &self.css)
            .field("expanded", &self.expanded)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;

    fn span_fg(text: &Text<'_>, content: &str) -> Option<Color> {
        text.lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.contains(content))
            .and_then(|s| s.style.fg)
    }

    #[test]
    fn test_initial_state() {
        let editor = LivePreview::new(Theme::default());
        assert!(!editor.is_expanded());
        assert_eq!(editor.html(), DEFAULT_HTML);
        assert_eq!(editor.css(), DEFAULT_CSS);
        assert_eq!(editor.active_style_blocks(), 1);
        assert_eq!(span_fg(editor.preview(), "Hello"), Some(Color::Rgb(0, 0, 255)));
    }

    #[test]
    fn test_css_edit_swaps_the_single_block() {
        let mut editor = LivePreview::new(Theme::default());
        editor.set_css("p { color: red; }");
        assert_eq!(editor.active_style_blocks(), 1);
        assert_eq!(span_fg(editor.preview(), "Hello"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(editor.css_input().value(), "p { color: red; }");
    }

    #[test]
    fn test_many_edits_never_accumulate_blocks() {
        let mut editor = LivePreview::new(Theme::default());
        for i in 0..20 {
            editor.set_css(format!("p {{ color: #0000{i:02x}; }}"));
        }
        editor.set_css("");
        assert_eq!(editor.active_style_blocks(), 1);
    }

    #[test]
    fn test_html_edit_rebuilds_preview() {
        let mut editor = LivePreview::new(Theme::default());
        editor.set_html("<p>Bye</p>");
        assert!(span_fg(editor.preview(), "Bye").is_some());
        assert!(span_fg(editor.preview(), "Hello").is_none());
    }

    #[test]
    fn test_handle_key_reports_changes_only() {
        let mut editor = LivePreview::new(Theme::default());
        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(editor.handle_key(EditorPane::Css, end), None);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        let changed = editor.handle_key(EditorPane::Css, key).unwrap();
        assert_eq!(changed, "p { color: blue; }x");
        // Text area changed, applied state did not yet
        assert_eq!(editor.css(), DEFAULT_CSS);
        editor.set_css(changed);
        assert_eq!(editor.css(), "p { color: blue; }x");
    }

    #[test]
    fn test_toggle_expanded_is_independent() {
        let mut editor = LivePreview::new(Theme::default());
        editor.toggle_expanded();
        assert!(editor.is_expanded());
        editor.set_css("b {}");
        assert!(editor.is_expanded());
    }
}
