//! Theme types for cheatsheet configuration.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the user-facing representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All themes in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Identifier accepted by `FromStr` and the environment.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }

    /// Next theme in the cycle (bound to `t` in the TUI).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    /// Parses a theme key; `-` and `_` are interchangeable and case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|t| t.key()).collect();
                format!("unknown theme '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub info: Color,
    pub warning: Color,
    pub disabled: Color,

    // Catalogue entries
    pub category: Color,
    pub element_name: Color,
    pub link: Color,
    pub code: Color,

    // Rendered markup
    pub markup_text: Color,
    pub markup_link: Color,
    pub markup_mark_fg: Color,
    pub markup_mark_bg: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                info: Color::Cyan,
                warning: Color::Yellow,
                disabled: Color::DarkGray,

                category: Color::Cyan,
                element_name: Color::Green,
                link: Color::Blue,
                code: Color::Magenta,

                markup_text: Color::White,
                markup_link: Color::LightBlue,
                markup_mark_fg: Color::Black,
                markup_mark_bg: Color::Yellow,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                info: Color::Blue,
                warning: Color::Yellow,
                disabled: Color::Gray,

                category: Color::Blue,
                element_name: Color::Green,
                link: Color::Blue,
                code: Color::Magenta,

                markup_text: Color::Black,
                markup_link: Color::Blue,
                markup_mark_fg: Color::Black,
                markup_mark_bg: Color::Yellow,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::Gray,
                text_dim: Color::DarkGray,
                border: Color::DarkGray,
                title: Color::LightCyan,
                accent: Color::LightYellow,

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                info: Color::LightCyan,
                warning: Color::LightYellow,
                disabled: Color::DarkGray,

                category: Color::LightCyan,
                element_name: Color::LightGreen,
                link: Color::LightBlue,
                code: Color::LightMagenta,

                markup_text: Color::Gray,
                markup_link: Color::LightBlue,
                markup_mark_fg: Color::Black,
                markup_mark_bg: Color::LightYellow,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::LightYellow,
                accent: Color::LightYellow,

                highlight_fg: Color::Black,
                highlight_bg: Color::LightYellow,

                info: Color::LightCyan,
                warning: Color::LightYellow,
                disabled: Color::Gray,

                category: Color::LightYellow,
                element_name: Color::LightGreen,
                link: Color::LightCyan,
                code: Color::LightMagenta,

                markup_text: Color::White,
                markup_link: Color::LightCyan,
                markup_mark_fg: Color::Black,
                markup_mark_bg: Color::LightYellow,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Indexed(245),
                border: Color::Indexed(250),
                title: Color::White,
                accent: Color::Indexed(255),

                highlight_fg: Color::Black,
                highlight_bg: Color::White,

                info: Color::White,
                warning: Color::White,
                disabled: Color::Indexed(240),

                category: Color::White,
                element_name: Color::White,
                link: Color::Indexed(250),
                code: Color::Indexed(250),

                markup_text: Color::White,
                markup_link: Color::White,
                markup_mark_fg: Color::Black,
                markup_mark_bg: Color::White,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
