//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header, toolbar, list, editor panel, footer).
//! - Dispatch to the list and editor renderers.
//!
//! Non-responsibilities:
//! - Does NOT handle input.
//! - Does NOT mutate app state beyond scroll position, row hitboxes and
//!   the editor's cursor styling.

use ratatui::{
    Frame,
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::app::layout::AppLayout;
use crate::app::rows::element_visible;
use crate::app::state::Focus;
use crate::ui::screens::cheatsheet::{ListView, render_cheatsheet_list};
use crate::ui::screens::editor::render_editor_panel;
use crate::ui::theme::{ThemeExt, pane_border};

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = AppLayout::calculate(self.last_area, self.editor.is_expanded());
        let theme = self.theme;

        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            self.last_area,
        );

        self.render_header(f, &layout);
        self.render_toolbar(f, &layout);

        let categories = self.categories();
        let expansion = &self.expansion;
        let is_expanded =
            |ci: usize| categories.get(ci).is_some_and(|c| expansion.is_expanded(c.name));
        let view = ListView {
            categories,
            rows: &self.rows,
            cursor: self.cursor,
            is_expanded: &is_expanded,
            linker: &self.linker,
            query: self.query.as_str(),
            focused: self.focus == Focus::List,
            theme: &theme,
        };
        self.row_hitboxes = render_cheatsheet_list(f, layout.list, &view, &mut self.list_scroll);

        let pane = self.editor_pane();
        self.editor.set_active_pane(pane);
        render_editor_panel(f, &layout.editor, &self.editor, pane, &theme);

        self.render_footer(f, &layout);
    }

    fn render_header(&self, f: &mut Frame, layout: &AppLayout) {
        let theme = &self.theme;
        let mut spans = vec![
            Span::styled("HTML Cheatsheet", theme.title()),
            Span::styled(format!("  [{}]", self.color_theme.display_name()), theme.text_dim()),
        ];
        if !self.query.is_empty() {
            let matching: usize = self
                .categories()
                .iter()
                .map(|c| {
                    (0..c.elements.len())
                        .filter(|&ei| element_visible(c, ei, &self.query))
                        .count()
                })
                .sum();
            spans.push(Span::styled(
                format!("  {matching} matching elements"),
                theme.info(),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), layout.header);
    }

    fn render_toolbar(&self, f: &mut Frame, layout: &AppLayout) {
        let theme = &self.theme;
        let focused = self.focus == Focus::Search;

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(pane_border(theme, focused))
            .title_style(theme.title());
        let inner = block.inner(layout.search);
        let width = usize::from(inner.width.max(1));
        let scroll = self.search_input.scroll_offset(width);

        let content = if self.search_input.is_empty() && !focused {
            Paragraph::new("Type / to search elements...").style(theme.disabled())
        } else {
            Paragraph::new(self.search_input.value())
                .style(theme.text())
                .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
        };
        f.render_widget(block, layout.search);
        f.render_widget(content, inner);

        if focused {
            let offset = self.search_input.cursor_position().saturating_sub(scroll);
            let x = inner.x + u16::try_from(offset).unwrap_or(u16::MAX).min(inner.width);
            f.set_cursor_position((x, inner.y));
        }

        let button = Paragraph::new(self.expand_all_label())
            .alignment(Alignment::Center)
            .style(theme.border_focused())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            );
        f.render_widget(button, layout.expand_button);
    }

    fn render_footer(&self, f: &mut Frame, layout: &AppLayout) {
        let hints: &[(&str, &str)] = match self.focus {
            Focus::List => &[
                ("↑↓", "move"),
                ("Enter", "toggle"),
                ("/", "search"),
                ("a", "expand all"),
                ("p", "editor"),
                ("t", "theme"),
                ("q", "quit"),
            ],
            Focus::Search => &[
                ("Enter", "results"),
                ("Esc", "list"),
                ("Tab", "next"),
                ("Ctrl+C", "quit"),
            ],
            Focus::Html | Focus::Css => &[
                ("Tab", "next pane"),
                ("Esc", "list"),
                ("F3", "close editor"),
                ("Ctrl+C", "quit"),
            ],
        };

        let theme = &self.theme;
        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (key, label) in hints {
            spans.push(Span::styled(*key, theme.info()));
            spans.push(Span::styled(format!(" {label}"), theme.text_dim()));
            spans.push(Span::raw("  "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), layout.footer);
    }
}
