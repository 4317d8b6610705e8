//! Core state types for the TUI app.

/// Height of the title header.
pub const HEADER_HEIGHT: u16 = 1;
/// Height of the search toolbar (bordered input + expand-all button).
pub const TOOLBAR_HEIGHT: u16 = 3;
/// Height of the key-hint footer.
pub const FOOTER_HEIGHT: u16 = 1;
/// Height of the live preview panel when collapsed (header only).
pub const EDITOR_COLLAPSED_HEIGHT: u16 = 1;
/// Width of the expand-all button including its borders.
pub const EXPAND_BUTTON_WIDTH: u16 = 16;

/// Which widget receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    Search,
    #[default]
    List,
    Html,
    Css,
}

impl Focus {
    /// Next focus stop. Editor panes are only stops while the editor is open.
    pub fn next(self, editor_expanded: bool) -> Self {
        match (self, editor_expanded) {
            (Focus::Search, _) => Focus::List,
            (Focus::List, true) => Focus::Html,
            (Focus::List, false) => Focus::Search,
            (Focus::Html, _) => Focus::Css,
            (Focus::Css, _) => Focus::Search,
        }
    }

    /// Previous focus stop.
    pub fn prev(self, editor_expanded: bool) -> Self {
        match (self, editor_expanded) {
            (Focus::Search, true) => Focus::Css,
            (Focus::Search, false) => Focus::List,
            (Focus::List, _) => Focus::Search,
            (Focus::Html, _) => Focus::List,
            (Focus::Css, _) => Focus::Html,
        }
    }

    /// Whether this focus edits text (and therefore swallows plain keys).
    pub fn is_text_input(self) -> bool {
        !matches!(self, Focus::List)
    }

    pub fn is_editor(self) -> bool {
        matches!(self, Focus::Html | Focus::Css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_collapsed_skips_editor() {
        let mut focus = Focus::Search;
        let mut seen = vec![focus];
        for _ in 0..3 {
            focus = focus.next(false);
            seen.push(focus);
        }
        assert_eq!(seen, vec![Focus::Search, Focus::List, Focus::Search, Focus::List]);
    }

    #[test]
    fn test_focus_cycle_expanded_visits_all() {
        let order: Vec<Focus> = std::iter::successors(Some(Focus::Search), |f| Some(f.next(true)))
            .take(5)
            .collect();
        assert_eq!(
            order,
            vec![Focus::Search, Focus::List, Focus::Html, Focus::Css, Focus::Search]
        );
    }

    #[test]
    fn test_prev_inverts_next() {
        for expanded in [true, false] {
            for focus in [Focus::Search, Focus::List] {
                assert_eq!(focus.next(expanded).prev(expanded), focus);
            }
        }
        assert_eq!(Focus::Css.prev(true).prev(true), Focus::List);
    }
}
