//! Tests for the live preview editor.
//!
//! This module tests:
//! - Opening and closing the panel
//! - Focus cycling through the HTML and CSS panes
//! - Edits flowing into the preview and the attached style block

mod helpers;
use helpers::*;
use cheatsheet_tui::app::editor::{DEFAULT_CSS, DEFAULT_HTML};
use cheatsheet_tui::{Action, Focus};
use ratatui::style::Color;
use ratatui::text::Text;

fn span_fg(text: &Text<'_>, content: &str) -> Option<Color> {
    text.lines
        .iter()
        .flat_map(|l| l.spans.iter())
        .find(|s| s.content.contains(content))
        .and_then(|s| s.style.fg)
}

#[test]
fn test_editor_starts_closed_with_defaults() {
    let app = test_app(false);
    assert!(!app.editor.is_expanded());
    assert_eq!(app.editor.html(), DEFAULT_HTML);
    assert_eq!(app.editor.css(), DEFAULT_CSS);
    assert_eq!(app.editor.active_style_blocks(), 1);
}

#[test]
fn test_tab_skips_closed_editor() {
    let mut app = test_app(false);
    press(&mut app, tab_key());
    assert_eq!(app.focus, Focus::Search);
    press(&mut app, tab_key());
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn test_tab_cycles_through_open_editor() {
    let mut app = test_app(false);
    press(&mut app, f_key(3));
    assert!(app.editor.is_expanded());

    press(&mut app, tab_key());
    press(&mut app, tab_key());
    assert_eq!(app.focus, Focus::Html);
    press(&mut app, tab_key());
    assert_eq!(app.focus, Focus::Css);
}

#[test]
fn test_css_edit_recolors_preview() {
    let mut app = test_app(false);
    app.update(Action::Focus(Focus::Css));
    assert!(app.editor.is_expanded());

    // Select everything and replace it
    for _ in 0..DEFAULT_CSS.len() {
        press(&mut app, backspace_key());
    }
    press(&mut app, end_key());
    for _ in 0..DEFAULT_CSS.len() {
        press(&mut app, backspace_key());
    }
    assert_eq!(app.editor.css(), "");
    type_text(&mut app, "p { color: red; }");

    assert_eq!(app.editor.css(), "p { color: red; }");
    assert_eq!(app.editor.active_style_blocks(), 1);
    assert_eq!(
        span_fg(app.editor.preview(), "Hello"),
        Some(Color::Rgb(255, 0, 0))
    );
}

#[test]
fn test_html_edit_via_action() {
    let mut app = test_app(false);
    app.update(Action::HtmlChanged("<h1>Title</h1><p>Body</p>".to_string()));
    let rendered: String = app
        .editor
        .preview()
        .lines
        .iter()
        .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
        .collect();
    assert!(rendered.contains("Title"));
    assert!(rendered.contains("Body"));
}

#[test]
fn test_repeated_css_edits_keep_one_block() {
    let mut app = test_app(false);
    for color in ["red", "green", "blue", "#abc", "rgb(1, 2, 3)"] {
        app.update(Action::CssChanged(format!("p {{ color: {color}; }}")));
        assert_eq!(app.editor.active_style_blocks(), 1);
    }
}

#[test]
fn test_list_keys_type_into_editor() {
    let mut app = test_app(false);
    app.update(Action::Focus(Focus::Html));
    let before = app.editor.html().to_string();
    // 'q' and 'a' are list shortcuts but must be typed here
    assert!(matches!(press(&mut app, key('q')), Some(Action::HtmlChanged(_))));
    assert!(matches!(press(&mut app, key('a')), Some(Action::HtmlChanged(_))));
    assert!(!app.should_quit);
    assert!(!app.expand_all);
    assert_eq!(app.editor.html().len(), before.len() + 2);
}

#[test]
fn test_closing_editor_from_pane_returns_to_list() {
    let mut app = test_app(false);
    app.update(Action::Focus(Focus::Css));
    press(&mut app, f_key(3));
    assert!(!app.editor.is_expanded());
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn test_editor_is_independent_of_list() {
    let mut app = test_app(false);
    app.update(Action::ToggleEditor);
    app.update(Action::ToggleExpandAll);
    app.update(Action::SearchChanged("table".to_string()));
    assert!(app.editor.is_expanded());
    assert_eq!(app.editor.html(), DEFAULT_HTML);
}
