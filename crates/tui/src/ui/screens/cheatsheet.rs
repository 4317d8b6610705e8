//! Cheatsheet list rendering.
//!
//! Responsibilities:
//! - Draw category headers and element entries for every non-hidden row.
//! - Scroll so the cursor row stays visible.
//! - Report where each row landed so mouse clicks can be mapped back.
//!
//! Non-responsibilities:
//! - Does not decide visibility or expansion (see `app::rows`).
//! - Does not handle input.

use cheatsheet_catalogue::{Category, Element, ReferenceLinker};
use cheatsheet_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{Row, RowHitbox, RowKey};
use crate::markup::render_markup;
use crate::ui::theme::{ThemeExt, pane_border};

const CURSOR_MARK: &str = "▸ ";
const NO_MARK: &str = "  ";
const ENTRY_INDENT: &str = "    ";
const BLOCK_INDENT: &str = "      ";

/// Everything the list needs to draw one frame.
pub struct ListView<'a> {
    pub categories: &'a [Category],
    pub rows: &'a [Row],
    pub cursor: Option<RowKey>,
    pub is_expanded: &'a dyn Fn(usize) -> bool,
    pub linker: &'a ReferenceLinker,
    pub query: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

/// The header line of a category: name plus disclosure indicator.
pub fn category_line(category: &Category, expanded: bool, theme: &Theme) -> Line<'static> {
    let indicator = if expanded { "▼" } else { "▶" };
    Line::from(vec![
        Span::styled(category.name.to_string(), theme.category()),
        Span::raw(" "),
        Span::styled(indicator, theme.text_dim()),
    ])
}

/// The lines of one element entry: title, reference link, literal source and,
/// unless suppressed, the rendered example.
pub fn element_lines(
    element: &Element,
    linker: &ReferenceLinker,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(element.name.to_string(), theme.element_name()),
        Span::styled(": ", theme.text_dim()),
        Span::styled(element.description.to_string(), theme.text()),
    ])];

    if let Some(url) = linker.url(element) {
        lines.push(Line::from(vec![
            Span::raw(BLOCK_INDENT),
            Span::styled("↗ ", theme.text_dim()),
            Span::styled(url, theme.link()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw(BLOCK_INDENT),
        Span::styled("Code:", theme.text_dim()),
    ]));
    for source_line in element.example.lines() {
        lines.push(Line::from(vec![
            Span::raw(format!("{BLOCK_INDENT}  ")),
            Span::styled(source_line.to_string(), theme.code()),
        ]));
    }

    if element.renders_example() {
        lines.push(Line::from(vec![
            Span::raw(BLOCK_INDENT),
            Span::styled("Example:", theme.text_dim()),
        ]));
        let rendered = render_markup(element.example, &[], theme);
        for line in rendered.lines {
            let mut spans = vec![Span::raw(format!("{BLOCK_INDENT}  "))];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::default());
    lines
}

fn row_lines(view: &ListView<'_>, key: RowKey) -> Vec<Line<'static>> {
    match key {
        RowKey::Category(ci) => view
            .categories
            .get(ci)
            .map(|category| vec![category_line(category, (view.is_expanded)(ci), view.theme)])
            .unwrap_or_default(),
        RowKey::Element(ci, ei) => view
            .categories
            .get(ci)
            .and_then(|category| category.elements.get(ei))
            .map(|element| element_lines(element, view.linker, view.theme))
            .unwrap_or_default(),
    }
}

/// Adjust `scroll` so the line span `[start, end)` is on screen.
fn scroll_into_view(scroll: usize, start: usize, end: usize, height: usize, total: usize) -> usize {
    let mut scroll = scroll;
    if end > scroll + height {
        scroll = end.saturating_sub(height);
    }
    if start < scroll || end - start > height {
        scroll = start;
    }
    scroll.min(total.saturating_sub(height))
}

/// Draw the list and return the hitboxes of the rows that were drawn.
pub fn render_cheatsheet_list(
    f: &mut Frame,
    area: Rect,
    view: &ListView<'_>,
    scroll: &mut usize,
) -> Vec<RowHitbox> {
    let block = Block::default()
        .title(" HTML Elements ")
        .borders(Borders::ALL)
        .border_style(pane_border(view.theme, view.focused))
        .title_style(view.theme.title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<(RowKey, usize, usize)> = Vec::new();
    for row in view.rows.iter().filter(|r| !r.hidden) {
        let start = lines.len();
        let is_cursor = view.cursor == Some(row.key);
        let indent = match row.key {
            RowKey::Category(_) => "",
            RowKey::Element(..) => ENTRY_INDENT,
        };

        for (i, mut line) in row_lines(view, row.key).into_iter().enumerate() {
            if i == 0 {
                let mark = if is_cursor { CURSOR_MARK } else { NO_MARK };
                line.spans.insert(0, Span::styled(format!("{indent}{mark}"), view.theme.info()));
                if is_cursor && view.focused {
                    line = line.patch_style(view.theme.highlight());
                }
            } else {
                line.spans.insert(0, Span::raw(format!("{indent}{NO_MARK}")));
            }
            lines.push(line);
        }
        spans.push((row.key, start, lines.len()));
    }

    if spans.is_empty() {
        let message = format!("No elements match \"{}\"", view.query);
        f.render_widget(Paragraph::new(message).style(view.theme.text_dim()), inner);
        *scroll = 0;
        return Vec::new();
    }

    let height = usize::from(inner.height);
    if let Some(&(_, start, end)) = spans.iter().find(|(key, _, _)| Some(*key) == view.cursor) {
        *scroll = scroll_into_view(*scroll, start, end, height, lines.len());
    } else {
        *scroll = (*scroll).min(lines.len().saturating_sub(height));
    }

    let window: Vec<Line<'static>> = lines.into_iter().skip(*scroll).take(height).collect();
    f.render_widget(Paragraph::new(window), inner);

    let top = *scroll;
    let bottom = top + height;
    spans
        .into_iter()
        .filter(|&(_, start, end)| end > top && start < bottom)
        .map(|(key, start, end)| RowHitbox {
            key,
            top: inner.y + (start.max(top) - top) as u16,
            bottom: inner.y + (end.min(bottom) - top) as u16,
        })
        .collect()
}
