//! Markup layout: tokens plus stylesheets in, styled terminal text out.
//!
//! Responsibilities:
//! - Maintain the open-element stack and close implied or mismatched tags.
//! - Cascade user-agent defaults, stylesheet rules and inline styles.
//! - Lay out block, list, table and replaced elements as terminal lines.
//!
//! Does NOT handle:
//! - Sanitization. Input is rendered as written.
//! - Wrapping to a width; the caller's `Paragraph` wraps.
//!
//! Invariants:
//! - Rendering is total: any input produces some (possibly empty) text.
//! - Later stylesheets win over earlier ones at equal specificity.

use std::mem;

use cheatsheet_config::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::css::{Declaration, ElementRef, Specificity, Stylesheet, parse_declarations};
use super::html::{Token, tokenize};
use super::style::ComputedStyle;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content never reaches the screen.
const NON_RENDERED: &[&str] = &["head", "title", "script", "style", "template", "noscript"];

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "caption", "details", "dialog", "dd",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "hgroup", "hr", "html", "legend", "li", "main", "nav", "ol", "p",
    "pre", "section", "summary", "table", "tbody", "tfoot", "thead", "tr", "ul",
];

/// Replaced elements that keep their children out of the flow.
const OPAQUE_REPLACED: &[&str] = &[
    "audio", "canvas", "iframe", "object", "select", "textarea", "video",
];

const RULE_WIDTH: usize = 24;

/// Render `html` against `sheets` (in attach order) with the given palette.
pub fn render_markup(html: &str, sheets: &[&Stylesheet], theme: &Theme) -> Text<'static> {
    let mut renderer = Renderer::new(sheets, theme);
    for token in tokenize(html) {
        renderer.token(&token);
    }
    renderer.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered(i64),
}

#[derive(Debug)]
struct OpenElement {
    tag: String,
    style: Style,
    hidden: bool,
    /// Children are replaced by a placeholder.
    opaque: bool,
    /// A `details` without `open`: only `summary` shows.
    closed_details: bool,
    list: Option<ListKind>,
    indented: bool,
    cells: usize,
}

struct Renderer<'a> {
    sheets: &'a [&'a Stylesheet],
    theme: &'a Theme,
    root_style: Style,
    stack: Vec<OpenElement>,
    out: LineBuilder,
}

impl<'a> Renderer<'a> {
    fn new(sheets: &'a [&'a Stylesheet], theme: &'a Theme) -> Self {
        Self {
            sheets,
            theme,
            root_style: Style::default().fg(theme.markup_text),
            stack: Vec::new(),
            out: LineBuilder::default(),
        }
    }

    fn token(&mut self, token: &Token) {
        match token {
            Token::StartTag { name, .. } => self.open(name, token),
            Token::EndTag { name } => self.close(name),
            Token::Text(text) => {
                if self.text_hidden() {
                    return;
                }
                let style = self.current_style();
                self.out.text(text, style);
            }
            Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    fn current_style(&self) -> Style {
        self.stack.last().map_or(self.root_style, |e| e.style)
    }

    fn text_hidden(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|e| e.hidden || e.opaque || e.closed_details)
    }

    fn open(&mut self, name: &str, token: &Token) {
        self.close_implied(name);

        let parent = self.stack.last();
        let parent_hidden = parent.is_some_and(|p| {
            p.hidden || p.opaque || (p.closed_details && name != "summary")
        });
        let parent_details = parent
            .filter(|p| p.tag == "details")
            .map(|p| !p.closed_details);

        let computed = self.compute_style(name, token);
        let style = self.current_style().patch(computed.style);
        let hidden = parent_hidden
            || computed.display_none
            || NON_RENDERED.contains(&name)
            || token.attr("hidden").is_some();

        let mut element = OpenElement {
            tag: name.to_string(),
            style,
            hidden,
            opaque: OPAQUE_REPLACED.contains(&name),
            closed_details: name == "details" && token.attr("open").is_none(),
            list: None,
            indented: false,
            cells: 0,
        };

        if !hidden {
            self.layout_open(&mut element, token, parent_details);
        }

        if !VOID_ELEMENTS.contains(&name) {
            self.stack.push(element);
        }
    }

    fn layout_open(&mut self, element: &mut OpenElement, token: &Token, parent_details: Option<bool>) {
        let name = element.tag.as_str();
        let style = element.style;

        if BLOCK_ELEMENTS.contains(&name) {
            self.out.block_break();
        }

        match name {
            "br" => self.out.hard_break(),
            "hr" => {
                let rule = "─".repeat(RULE_WIDTH);
                self.out.inline(&rule, style.add_modifier(Modifier::DIM));
                self.out.block_break();
            }
            "ul" | "ol" => {
                element.list = Some(if name == "ol" {
                    let start = token
                        .attr("start")
                        .and_then(|s| s.trim().parse().ok())
                        .unwrap_or(1);
                    ListKind::Ordered(start)
                } else {
                    ListKind::Unordered
                });
                element.indented = true;
                self.out.indent += 1;
            }
            "dd" | "blockquote" => {
                element.indented = true;
                self.out.indent += 1;
            }
            "pre" => self.out.pre_depth += 1,
            "li" => {
                let marker = match self.stack.iter_mut().rev().find_map(|e| e.list.as_mut()) {
                    Some(ListKind::Ordered(n)) => {
                        let marker = format!("{n}. ");
                        *n = n.saturating_add(1);
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.out.marker(&marker, style);
            }
            "summary" => {
                let marker = match parent_details {
                    Some(true) => "▼ ",
                    _ => "▶ ",
                };
                self.out.marker(marker, style);
            }
            "td" | "th" => {
                if let Some(row) = self.stack.iter_mut().rev().find(|e| e.tag == "tr") {
                    if row.cells > 0 {
                        self.out
                            .inline(" │ ", Style::default().fg(self.theme.border));
                    }
                    row.cells += 1;
                }
            }
            "q" => self.out.inline("“", style),
            "button" => self.out.inline("[", style),
            _ => {
                if let Some(placeholder) = placeholder(name, token) {
                    self.out.inline(&placeholder, style);
                }
            }
        }
    }

    /// Close elements that HTML ends implicitly when `name` starts.
    fn close_implied(&mut self, name: &str) {
        let Some(top) = self.stack.last().map(|e| e.tag.as_str()) else {
            return;
        };
        let implied = match name {
            "li" => top == "li",
            "dt" | "dd" => matches!(top, "dt" | "dd"),
            "td" | "th" => matches!(top, "td" | "th"),
            "tr" => matches!(top, "td" | "th" | "tr"),
            "option" => top == "option",
            _ => top == "p" && BLOCK_ELEMENTS.contains(&name),
        };
        if implied {
            let top = top.to_string();
            self.close(&top);
            // a new row also ends the previous row after its last cell
            if name == "tr" && self.stack.last().is_some_and(|e| e.tag == "tr") {
                self.close("tr");
            }
        }
    }

    fn close(&mut self, name: &str) {
        let Some(index) = self.stack.iter().rposition(|e| e.tag == name) else {
            return;
        };
        while self.stack.len() > index {
            if let Some(element) = self.stack.pop() {
                self.layout_close(&element);
            }
        }
    }

    fn layout_close(&mut self, element: &OpenElement) {
        if element.hidden {
            return;
        }
        match element.tag.as_str() {
            "q" => self.out.inline("”", element.style),
            "button" => self.out.inline("]", element.style),
            "pre" => self.out.pre_depth = self.out.pre_depth.saturating_sub(1),
            _ => {}
        }
        if element.indented {
            self.out.indent = self.out.indent.saturating_sub(1);
        }
        if BLOCK_ELEMENTS.contains(&element.tag.as_str()) {
            self.out.block_break();
        }
    }

    /// UA defaults, then stylesheet rules by specificity, then the inline style.
    fn compute_style(&self, name: &str, token: &Token) -> ComputedStyle {
        let mut computed = ComputedStyle {
            style: user_agent_style(name, self.theme),
            display_none: false,
        };

        let element = ElementRef {
            tag: name,
            id: token.attr("id"),
            class: token.attr("class"),
        };
        let mut matched: Vec<(Specificity, usize, &Declaration)> = Vec::new();
        let mut order = 0usize;
        for sheet in self.sheets {
            for rule in &sheet.rules {
                order += 1;
                let best = rule
                    .selectors
                    .iter()
                    .filter(|s| s.matches(&element))
                    .map(|s| s.specificity())
                    .max();
                if let Some(specificity) = best {
                    matched.extend(rule.declarations.iter().map(|d| (specificity, order, d)));
                }
            }
        }
        matched.sort_by_key(|(specificity, order, _)| (*specificity, *order));
        computed.apply_all(matched.into_iter().map(|(_, _, d)| d));

        if let Some(inline) = token.attr("style") {
            computed.apply_all(&parse_declarations(inline));
        }
        computed
    }

    fn finish(mut self) -> Text<'static> {
        while let Some(element) = self.stack.pop() {
            self.layout_close(&element);
        }
        self.out.finish()
    }
}

fn user_agent_style(name: &str, theme: &Theme) -> Style {
    let style = Style::default();
    match name {
        "strong" | "b" | "th" | "dt" | "summary" | "legend" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            style.add_modifier(Modifier::BOLD)
        }
        "h1" => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        "em" | "i" | "cite" | "dfn" | "var" | "address" | "caption" => {
            style.add_modifier(Modifier::ITALIC)
        }
        "u" | "ins" => style.add_modifier(Modifier::UNDERLINED),
        "a" => style
            .fg(theme.markup_link)
            .add_modifier(Modifier::UNDERLINED),
        "mark" => style.fg(theme.markup_mark_fg).bg(theme.markup_mark_bg),
        "small" | "figcaption" => style.add_modifier(Modifier::DIM),
        "del" | "s" | "strike" => style.add_modifier(Modifier::CROSSED_OUT),
        "code" | "kbd" | "samp" | "pre" | "tt" => style.fg(theme.code),
        _ => style,
    }
}

/// Bracketed stand-in for a replaced element.
fn placeholder(name: &str, token: &Token) -> Option<String> {
    let labelled = |kind: &str, label: Option<&str>| match label.map(str::trim) {
        Some(label) if !label.is_empty() => format!("[{kind}: {label}]"),
        _ => format!("[{kind}]"),
    };

    Some(match name {
        "img" => labelled("image", token.attr("alt")),
        "input" => {
            let kind = token.attr("type").unwrap_or("text").to_ascii_lowercase();
            let checked = token.attr("checked").is_some();
            match kind.as_str() {
                "hidden" => return None,
                "checkbox" => (if checked { "[x]" } else { "[ ]" }).to_string(),
                "radio" => (if checked { "(•)" } else { "( )" }).to_string(),
                "submit" | "button" | "reset" => {
                    let label = token.attr("value").unwrap_or(match kind.as_str() {
                        "submit" => "Submit",
                        "reset" => "Reset",
                        _ => "",
                    });
                    format!("[ {label} ]")
                }
                _ => {
                    let shown = token
                        .attr("value")
                        .filter(|v| !v.is_empty())
                        .or_else(|| token.attr("placeholder"))
                        .unwrap_or("");
                    format!("[{shown:_<12}]")
                }
            }
        }
        "textarea" => labelled("textarea", token.attr("placeholder")),
        "select" => "[select ▾]".to_string(),
        "video" => labelled("video", token.attr("src")),
        "audio" => labelled("audio", token.attr("src")),
        "iframe" => labelled("iframe", token.attr("src")),
        "embed" => labelled("embed", token.attr("src")),
        "object" => labelled("object", token.attr("data")),
        "canvas" => "[canvas]".to_string(),
        _ => return None,
    })
}

/// Accumulates spans into lines with HTML whitespace collapsing.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    has_content: bool,
    pending_space: Option<Style>,
    indent: usize,
    pre_depth: usize,
}

impl LineBuilder {
    fn text(&mut self, text: &str, style: Style) {
        if self.pre_depth > 0 {
            for (i, part) in text.split('\n').enumerate() {
                if i > 0 {
                    self.hard_break();
                }
                if !part.is_empty() {
                    self.start_line(0);
                    self.current
                        .push(Span::styled(part.replace('\t', "    "), style));
                }
            }
            return;
        }

        let mut word = String::new();
        for c in text.chars() {
            if c.is_whitespace() && c != '\u{a0}' {
                if !word.is_empty() {
                    self.word(mem::take(&mut word), style);
                }
                if self.has_content {
                    self.pending_space = Some(style);
                }
            } else {
                word.push(if c == '\u{a0}' { ' ' } else { c });
            }
        }
        if !word.is_empty() {
            self.word(word, style);
        }
    }

    fn word(&mut self, word: String, style: Style) {
        self.start_line(0);
        if let Some(space_style) = self.pending_space.take() {
            self.current.push(Span::styled(" ", space_style));
        }
        self.current.push(Span::styled(word, style));
    }

    /// Literal text that is not subject to collapsing.
    fn inline(&mut self, text: &str, style: Style) {
        self.word(text.to_string(), style);
    }

    /// List and disclosure markers hang one indent level to the left.
    fn marker(&mut self, marker: &str, style: Style) {
        self.start_line(1);
        self.current.push(Span::styled(marker.to_string(), style));
    }

    fn start_line(&mut self, outdent: usize) {
        if !self.has_content {
            let pad = "  ".repeat(self.indent.saturating_sub(outdent));
            if !pad.is_empty() {
                self.current.push(Span::raw(pad));
            }
            self.has_content = true;
            self.pending_space = None;
        }
    }

    fn block_break(&mut self) {
        if self.has_content {
            self.flush();
        }
        self.pending_space = None;
    }

    fn hard_break(&mut self) {
        self.flush();
    }

    fn flush(&mut self) {
        self.lines.push(Line::from(mem::take(&mut self.current)));
        self.has_content = false;
        self.pending_space = None;
    }

    fn finish(mut self) -> Text<'static> {
        if self.has_content {
            self.flush();
        }
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}
