//! TUI-specific theme helpers and style builders.
//!
//! This module extends `cheatsheet_config::Theme` with helpers for building
//! ratatui `Style` objects consistently across the TUI.

use cheatsheet_config::Theme;
use ratatui::style::{Modifier, Style};

/// Extension trait for building styles from a theme.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    /// Selected row / focused button.
    fn highlight(&self) -> Style;
    fn info(&self) -> Style;
    fn warning(&self) -> Style;
    fn disabled(&self) -> Style;
    fn category(&self) -> Style;
    fn element_name(&self) -> Style;
    fn link(&self) -> Style;
    fn code(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn category(&self) -> Style {
        Style::default()
            .fg(self.category)
            .add_modifier(Modifier::BOLD)
    }

    fn element_name(&self) -> Style {
        Style::default()
            .fg(self.element_name)
            .add_modifier(Modifier::BOLD)
    }

    fn link(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    fn code(&self) -> Style {
        Style::default().fg(self.code)
    }
}

/// Border style for a pane depending on focus.
pub fn pane_border(theme: &Theme, focused: bool) -> Style {
    if focused {
        theme.border_focused()
    } else {
        theme.border()
    }
}
