//! Live preview panel rendering.
//!
//! Responsibilities:
//! - Render the clickable panel header with its disclosure indicator.
//! - When open, render the HTML and CSS text areas and the preview pane.
//!
//! Non-responsibilities:
//! - Does not rebuild the preview (see `app::editor`).

use cheatsheet_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::layout::EditorLayout;
use crate::app::{EditorPane, LivePreview};
use crate::ui::theme::{ThemeExt, pane_border};

/// Header text for the panel.
pub fn editor_header(expanded: bool) -> String {
    format!("HTML Editor {}", if expanded { "▼" } else { "▶" })
}

pub fn render_editor_panel(
    f: &mut Frame,
    layout: &EditorLayout,
    editor: &LivePreview,
    focused: Option<EditorPane>,
    theme: &Theme,
) {
    let header = Line::from(vec![
        Span::styled(editor_header(editor.is_expanded()), theme.title()),
        Span::styled("  (F3)", theme.text_dim()),
    ]);
    f.render_widget(Paragraph::new(header), layout.header);

    if let Some(area) = layout.html {
        render_source_pane(f, area, " HTML ", editor, EditorPane::Html, focused, theme);
    }
    if let Some(area) = layout.css {
        render_source_pane(f, area, " CSS ", editor, EditorPane::Css, focused, theme);
    }
    if let Some(area) = layout.preview {
        let block = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title_style(theme.title());
        let preview = Paragraph::new(editor.preview().clone())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(preview, area);
    }
}

fn render_source_pane(
    f: &mut Frame,
    area: Rect,
    title: &'static str,
    editor: &LivePreview,
    pane: EditorPane,
    focused: Option<EditorPane>,
    theme: &Theme,
) {
    let is_focused = focused == Some(pane);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(pane_border(theme, is_focused))
        .title_style(theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let input = match pane {
        EditorPane::Html => editor.html_input(),
        EditorPane::Css => editor.css_input(),
    };
    f.render_widget(input, inner);
}
