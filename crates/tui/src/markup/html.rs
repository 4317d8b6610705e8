//! HTML tokenizer.
//!
//! Responsibilities:
//! - Split markup into start tags, end tags, text, comments and doctypes.
//! - Decode named and numeric character references in text and attribute values.
//!
//! Does NOT handle:
//! - Tree construction or implied end tags (see `render`).
//!
//! Invariants:
//! - Tokenizing never fails. A `<` that does not open a well-formed tag is text.
//! - Tag and attribute names are lowercased.
//! - The contents of raw text elements (`script`, `style`, `textarea`, `title`)
//!   are emitted as a single text token and never parsed for tags.

/// A single attribute on a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Decoded value; bare attributes (`<details open>`) have an empty value.
    pub value: String,
}

/// One lexical unit of an HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
    Comment(String),
    Doctype(String),
}

impl Token {
    /// Look up an attribute value on a start tag.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Token::StartTag { attrs, .. } => attrs
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }
}

/// Elements whose content is raw text.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let Some(lt) = rest.find('<') else {
            text.push_str(rest);
            break;
        };
        text.push_str(&rest[..lt]);
        pos += lt;

        match lex_markup(input, pos) {
            Some((token, next)) => {
                flush_text(&mut text, &mut tokens);
                let raw_name = match &token {
                    Token::StartTag {
                        name,
                        self_closing: false,
                        ..
                    } if RAW_TEXT_ELEMENTS.contains(&name.as_str()) => Some(name.clone()),
                    _ => None,
                };
                tokens.push(token);
                pos = next;

                if let Some(name) = raw_name {
                    let end = find_end_tag(input, pos, &name).unwrap_or(input.len());
                    let raw = &input[pos..end];
                    if !raw.is_empty() {
                        // script/style stay verbatim, RCDATA elements decode references
                        let content = if matches!(name.as_str(), "script" | "style") {
                            raw.to_string()
                        } else {
                            decode_entities(raw)
                        };
                        tokens.push(Token::Text(content));
                    }
                    pos = end;
                }
            }
            None => {
                text.push('<');
                pos += 1;
            }
        }
    }

    flush_text(&mut text, &mut tokens);
    tokens
}

fn flush_text(text: &mut String, tokens: &mut Vec<Token>) {
    if !text.is_empty() {
        tokens.push(Token::Text(decode_entities(text)));
        text.clear();
    }
}

/// Lex the construct starting at `input[pos] == '<'`.
///
/// Returns the token and the byte offset just past it, or `None` when the
/// `<` is literal text.
fn lex_markup(input: &str, pos: usize) -> Option<(Token, usize)> {
    let rest = &input[pos..];

    if let Some(body) = rest.strip_prefix("<!--") {
        let (comment, consumed) = match body.find("-->") {
            Some(end) => (&body[..end], end + 3),
            None => (body, body.len()),
        };
        return Some((Token::Comment(comment.to_string()), pos + 4 + consumed));
    }

    if let Some(body) = rest.strip_prefix("<!") {
        let end = body.find('>')?;
        let decl = body[..end].trim();
        let doctype = strip_prefix_ignore_case(decl, "doctype")
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| decl.to_string());
        return Some((Token::Doctype(doctype), pos + 2 + end + 1));
    }

    if let Some(body) = rest.strip_prefix("</") {
        if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let end = body.find('>')?;
        let name = read_name(&body[..end]).to_ascii_lowercase();
        return Some((Token::EndTag { name }, pos + 2 + end + 1));
    }

    let body = &rest[1..];
    if !body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name = read_name(body);
    let (attrs, self_closing, consumed) = lex_attributes(&body[name.len()..])?;
    Some((
        Token::StartTag {
            name: name.to_ascii_lowercase(),
            attrs,
            self_closing,
        },
        pos + 1 + name.len() + consumed,
    ))
}

fn read_name(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':'))
        .unwrap_or(s.len());
    &s[..end]
}

/// Parse attributes up to and including the closing `>`.
///
/// Returns `None` when the input ends before the tag is closed.
fn lex_attributes(s: &str) -> Option<(Vec<Attribute>, bool, usize)> {
    let mut attrs = Vec::new();
    let mut chars = s.char_indices().peekable();

    loop {
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        let (i, c) = chars.next()?;
        match c {
            '>' => return Some((attrs, false, i + 1)),
            '/' => {
                if let Some(&(j, '>')) = chars.peek() {
                    return Some((attrs, true, j + 1));
                }
            }
            _ => {
                let mut name = String::from(c);
                while let Some((_, c)) =
                    chars.next_if(|(_, c)| !c.is_whitespace() && !matches!(c, '=' | '>' | '/'))
                {
                    name.push(c);
                }
                while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

                let mut value = String::new();
                if chars.next_if(|(_, c)| *c == '=').is_some() {
                    while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
                    match chars.peek().map(|(_, c)| *c) {
                        Some(quote @ ('"' | '\'')) => {
                            chars.next();
                            loop {
                                let (_, c) = chars.next()?;
                                if c == quote {
                                    break;
                                }
                                value.push(c);
                            }
                        }
                        _ => {
                            while let Some((_, c)) =
                                chars.next_if(|(_, c)| !c.is_whitespace() && *c != '>')
                            {
                                value.push(c);
                            }
                        }
                    }
                }

                attrs.push(Attribute {
                    name: name.to_ascii_lowercase(),
                    value: decode_entities(&value),
                });
            }
        }
    }
}

/// Find the byte offset of `</name` (case-insensitive) at or after `from`.
fn find_end_tag(input: &str, from: usize, name: &str) -> Option<usize> {
    let haystack = input[from..].to_ascii_lowercase();
    let needle = format!("</{name}");
    haystack.find(&needle).map(|i| from + i)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Decode character references.
///
/// Unknown or unterminated references are left untouched.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .filter(|&semi| semi > 1 && semi <= 12)
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).filter(|c| *c != '\0');
    }

    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "laquo" => '«',
        "raquo" => '»',
        "middot" => '·',
        "times" => '×',
        "deg" => '°',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(name: &str) -> Token {
        Token::StartTag {
            name: name.to_string(),
            attrs: Vec::new(),
            self_closing: false,
        }
    }

    fn end(name: &str) -> Token {
        Token::EndTag {
            name: name.to_string(),
        }
    }

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    #[test]
    fn test_simple_document() {
        let tokens = tokenize("<p>Hello, <strong>world</strong>!</p>");
        assert_eq!(
            tokens,
            vec![
                start("p"),
                text("Hello, "),
                start("strong"),
                text("world"),
                end("strong"),
                text("!"),
                end("p"),
            ]
        );
    }

    #[test]
    fn test_attributes_quoted_unquoted_and_bare() {
        let tokens = tokenize(r#"<input type=checkbox checked data-x='a b' title="x &amp; y">"#);
        let Token::StartTag {
            name,
            attrs,
            self_closing,
        } = &tokens[0]
        else {
            panic!("expected start tag, got {:?}", tokens[0]);
        };
        assert_eq!(name, "input");
        assert!(!self_closing);
        assert_eq!(tokens[0].attr("type"), Some("checkbox"));
        assert_eq!(tokens[0].attr("checked"), Some(""));
        assert_eq!(tokens[0].attr("data-x"), Some("a b"));
        assert_eq!(tokens[0].attr("title"), Some("x & y"));
        assert_eq!(attrs.len(), 4);
    }

    #[test]
    fn test_self_closing_and_case() {
        let tokens = tokenize("<BR/><Img SRC=\"a.png\" />");
        assert_eq!(
            tokens[0],
            Token::StartTag {
                name: "br".to_string(),
                attrs: Vec::new(),
                self_closing: true
            }
        );
        assert_eq!(tokens[1].attr("src"), Some("a.png"));
    }

    #[test]
    fn test_comment_and_doctype() {
        let tokens = tokenize("<!DOCTYPE html><!-- note -->x");
        assert_eq!(
            tokens,
            vec![
                Token::Doctype("html".to_string()),
                Token::Comment(" note ".to_string()),
                text("x"),
            ]
        );
    }

    #[test]
    fn test_stray_angle_brackets_are_text() {
        assert_eq!(tokenize("a < b > c"), vec![text("a < b > c")]);
        assert_eq!(tokenize("1 <2"), vec![text("1 <2")]);
        assert_eq!(tokenize("<p class=\"x"), vec![text("<p class=\"x")]);
    }

    #[test]
    fn test_raw_text_elements() {
        let tokens = tokenize("<style>p > b { color: red }</style><p>x</p>");
        assert_eq!(tokens[0], start("style"));
        assert_eq!(tokens[1], text("p > b { color: red }"));
        assert_eq!(tokens[2], end("style"));
        assert_eq!(tokens[3], start("p"));
    }

    #[test]
    fn test_unterminated_raw_text_runs_to_end() {
        let tokens = tokenize("<script>let a = 1 < 2;");
        assert_eq!(tokens, vec![start("script"), text("let a = 1 < 2;")]);
    }

    #[test]
    fn test_entities() {
        assert_eq!(decode_entities("&lt;p&gt; &amp; &copy;"), "<p> & ©");
        assert_eq!(decode_entities("&#65;&#x42;&#X43;"), "ABC");
        assert_eq!(decode_entities("&nbsp;"), "\u{a0}");
        assert_eq!(decode_entities("AT&T &bogus; &"), "AT&T &bogus; &");
        assert_eq!(decode_entities("&#0;"), "&#0;");
    }
}
