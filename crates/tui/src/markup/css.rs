//! CSS rule parser.
//!
//! Responsibilities:
//! - Parse stylesheets into rules of compound selectors and declarations.
//! - Parse declaration lists, shared with inline `style` attributes.
//! - Compute selector specificity and match selectors against elements.
//!
//! Does NOT handle:
//! - Combinators, pseudo-classes or attribute selectors. Selectors using them
//!   are dropped so they never match.
//! - Interpreting property values (see `style`).
//!
//! Invariants:
//! - Parsing never fails; malformed rules are skipped.
//! - Comments and at-rules (including their blocks) are ignored.

/// A `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub property: String,
    pub value: String,
}

/// `(ids, classes, types)` weight of a selector.
pub type Specificity = (u16, u16, u16);

/// A compound selector such as `p`, `.note`, `#main`, `*` or `p.note#main`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// What a selector can see of an element.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    pub tag: &'a str,
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl Selector {
    /// Parse a single compound selector.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut selector = Selector::default();
        let mut rest = text;

        if let Some(r) = rest.strip_prefix('*') {
            rest = r;
        } else if rest.starts_with(is_ident_char) {
            let (tag, r) = split_ident(rest);
            selector.tag = Some(tag.to_ascii_lowercase());
            rest = r;
        }

        while let Some(kind) = rest.chars().next() {
            let (name, r) = split_ident(&rest[kind.len_utf8()..]);
            if name.is_empty() {
                return None;
            }
            match kind {
                '.' => selector.classes.push(name.to_string()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_string()),
                _ => return None,
            }
            rest = r;
        }

        Some(selector)
    }

    pub fn specificity(&self) -> Specificity {
        (
            u16::from(self.id.is_some()),
            self.classes.len() as u16,
            u16::from(self.tag.is_some()),
        )
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        if let Some(tag) = &self.tag
            && tag != element.tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.id != Some(id.as_str())
        {
            return false;
        }
        self.classes.iter().all(|wanted| {
            element
                .class
                .is_some_and(|list| list.split_whitespace().any(|c| c == wanted))
        })
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn split_ident(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// One rule of a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// A parsed stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn parse(css: &str) -> Self {
        let css = strip_comments(css);
        let mut rules = Vec::new();
        let mut rest = css.as_str();

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            if rest.starts_with('@') {
                rest = skip_at_rule(rest);
                continue;
            }

            let Some(open) = rest.find('{') else { break };
            let prelude = &rest[..open];
            let after = &rest[open + 1..];
            let (body, remaining) = match find_block_end(after) {
                Some(close) => (&after[..close], &after[close + 1..]),
                None => (after, ""),
            };
            rest = remaining;

            // `a, b:hover` keeps `a`; a rule with no usable selector is dropped.
            let selectors: Vec<Selector> = prelude.split(',').filter_map(Selector::parse).collect();
            if selectors.is_empty() {
                continue;
            }
            let declarations = parse_declarations(body);
            if !declarations.is_empty() {
                rules.push(Rule {
                    selectors,
                    declarations,
                });
            }
        }

        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse `color: red; font-weight: bold` into declarations.
pub fn parse_declarations(body: &str) -> Vec<Declaration> {
    strip_comments(body)
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value);
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some(Declaration {
                property,
                value: value.to_string(),
            })
        })
        .collect()
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Index of the `}` closing a block whose `{` was already consumed.
fn find_block_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(i),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn skip_at_rule(s: &str) -> &str {
    let semi = s.find(';');
    let open = s.find('{');
    match (semi, open) {
        (Some(semi), Some(open)) if semi < open => &s[semi + 1..],
        (_, Some(open)) => match find_block_end(&s[open + 1..]) {
            Some(close) => &s[open + 1 + close + 1..],
            None => "",
        },
        (Some(semi), None) => &s[semi + 1..],
        (None, None) => "",
    }
}
