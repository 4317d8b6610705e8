//! Property interpretation for rendered markup.
//!
//! Maps CSS declarations onto `ratatui` styles. Only the properties a
//! terminal can express are honored; everything else is ignored.

use ratatui::style::{Color, Modifier, Style};

use super::css::Declaration;

/// Style of one element after the cascade, before inheritance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    pub style: Style,
    pub display_none: bool,
}

impl ComputedStyle {
    pub fn apply_all<'a>(&mut self, declarations: impl IntoIterator<Item = &'a Declaration>) {
        for declaration in declarations {
            self.apply(declaration);
        }
    }

    pub fn apply(&mut self, declaration: &Declaration) {
        let value = declaration.value.trim();
        let lower = value.to_ascii_lowercase();
        match declaration.property.as_str() {
            "color" => {
                if let Some(color) = parse_color(&lower) {
                    self.style = self.style.fg(color);
                }
            }
            "background-color" => {
                if let Some(color) = parse_color(&lower) {
                    self.style = self.style.bg(color);
                }
            }
            "background" => {
                // First token that reads as a color wins
                if let Some(color) = lower.split_whitespace().find_map(parse_color) {
                    self.style = self.style.bg(color);
                }
            }
            "font-weight" => match lower.as_str() {
                "bold" | "bolder" => self.set(Modifier::BOLD, true),
                "normal" | "lighter" => self.set(Modifier::BOLD, false),
                n => {
                    if let Ok(weight) = n.parse::<u16>() {
                        self.set(Modifier::BOLD, weight >= 600);
                    }
                }
            },
            "font-style" => match lower.as_str() {
                "italic" | "oblique" => self.set(Modifier::ITALIC, true),
                "normal" => self.set(Modifier::ITALIC, false),
                _ => {}
            },
            "text-decoration" | "text-decoration-line" => {
                if lower.split_whitespace().any(|t| t == "none") {
                    self.set(Modifier::UNDERLINED, false);
                    self.set(Modifier::CROSSED_OUT, false);
                } else {
                    for token in lower.split_whitespace() {
                        match token {
                            "underline" => self.set(Modifier::UNDERLINED, true),
                            "line-through" => self.set(Modifier::CROSSED_OUT, true),
                            _ => {}
                        }
                    }
                }
            }
            "display" => self.display_none = lower == "none",
            _ => {}
        }
    }

    fn set(&mut self, modifier: Modifier, on: bool) {
        self.style = if on {
            self.style.add_modifier(modifier)
        } else {
            self.style.remove_modifier(modifier)
        };
    }
}

/// Parse a CSS color value: basic named colors, `#rgb`, `#rrggbb` and `rgb(r, g, b)`.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(args) = value
        .strip_prefix("rgb(")
        .or_else(|| value.strip_prefix("rgba("))
        .and_then(|v| v.strip_suffix(')'))
    {
        let mut channels = args.split([',', ' ']).filter(|s| !s.is_empty());
        let mut next = || -> Option<u8> {
            let raw = channels.next()?.trim();
            match raw.strip_suffix('%') {
                Some(pct) => pct
                    .parse::<f32>()
                    .ok()
                    .map(|p| (p.clamp(0.0, 100.0) * 2.55).round() as u8),
                None => raw.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0) as u8),
            }
        };
        return Some(Color::Rgb(next()?, next()?, next()?));
    }
    named_color(value)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut it = hex.chars().map(|c| {
                let d = c.to_digit(16).unwrap_or(0) as u8;
                d * 17
            });
            Some(Color::Rgb(it.next()?, it.next()?, it.next()?))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "white" => (255, 255, 255),
        "maroon" => (128, 0, 0),
        "red" => (255, 0, 0),
        "purple" => (128, 0, 128),
        "fuchsia" | "magenta" => (255, 0, 255),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "olive" => (128, 128, 0),
        "yellow" => (255, 255, 0),
        "navy" => (0, 0, 128),
        "blue" => (0, 0, 255),
        "teal" => (0, 128, 128),
        "aqua" | "cyan" => (0, 255, 255),
        "orange" => (255, 165, 0),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "gold" => (255, 215, 0),
        "indigo" => (75, 0, 130),
        "violet" => (238, 130, 238),
        "coral" => (255, 127, 80),
        "crimson" => (220, 20, 60),
        "tomato" => (255, 99, 71),
        "salmon" => (250, 128, 114),
        "khaki" => (240, 230, 140),
        "darkgreen" => (0, 100, 0),
        "darkblue" => (0, 0, 139),
        "darkred" => (139, 0, 0),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "darkgray" | "darkgrey" => (169, 169, 169),
        "steelblue" => (70, 130, 180),
        "skyblue" => (135, 206, 235),
        "rebeccapurple" => (102, 51, 153),
        _ => return None,
    };
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(parse_color("red"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color("#1e90ff"), Some(Color::Rgb(30, 144, 255)));
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color("rgb(100%, 0%, 0%)"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#ggg"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_apply_color_and_weight() {
        let mut computed = ComputedStyle::default();
        computed.apply_all(&[
            decl("color", "Blue"),
            decl("font-weight", "700"),
            decl("background", "url(x.png) #fff no-repeat"),
        ]);
        assert_eq!(computed.style.fg, Some(Color::Rgb(0, 0, 255)));
        assert_eq!(computed.style.bg, Some(Color::Rgb(255, 255, 255)));
        assert!(computed.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_normal_weight_removes_bold() {
        let mut computed = ComputedStyle {
            style: Style::default().add_modifier(Modifier::BOLD),
            display_none: false,
        };
        computed.apply(&decl("font-weight", "normal"));
        assert!(!computed.style.add_modifier.contains(Modifier::BOLD));
        assert!(computed.style.sub_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_decoration_and_display() {
        let mut computed = ComputedStyle::default();
        computed.apply(&decl("text-decoration", "underline line-through"));
        assert!(computed.style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(computed.style.add_modifier.contains(Modifier::CROSSED_OUT));
        computed.apply(&decl("text-decoration", "none"));
        assert!(!computed.style.add_modifier.contains(Modifier::UNDERLINED));

        computed.apply(&decl("display", "none"));
        assert!(computed.display_none);
        computed.apply(&decl("display", "block"));
        assert!(!computed.display_none);
    }
}
