//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: focus and fixed layout sizes
//! - `expansion`: which categories are open
//! - `rows`: the row tree and cursor anchoring
//! - `editor`: the live preview widget
//! - `layout`: rectangles shared by rendering and mouse handling
//! - `input`: key handling and text input components
//! - `mouse`: mouse handling
//! - `navigation`: cursor movement helpers
//! - `actions`: `App::update`
//! - `render`: drawing

pub mod editor;
pub mod expansion;
pub mod input;
pub mod layout;
pub mod rows;
pub mod state;

mod actions;
mod mouse;
mod navigation;
mod render;

pub use editor::{EditorPane, LivePreview};
pub use expansion::ExpansionState;
pub use layout::AppLayout;
pub use rows::{Row, RowKey};
pub use state::Focus;

use cheatsheet_catalogue::{Category, ReferenceLinker, SearchQuery, category_names};
use cheatsheet_config::{ColorTheme, Config, Theme};
use ratatui::layout::Rect;

use crate::app::input::components::SingleLineInput;

/// Screen span of one rendered list row, for click hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHitbox {
    pub key: RowKey,
    /// First screen row (inclusive).
    pub top: u16,
    /// Last screen row (exclusive).
    pub bottom: u16,
}

/// Main application state.
pub struct App {
    pub color_theme: ColorTheme,
    pub theme: Theme,

    categories: &'static [Category],
    category_names: Vec<String>,
    pub linker: ReferenceLinker,

    // Search
    pub search_input: SingleLineInput,
    pub query: SearchQuery,

    // Expansion
    pub expand_all: bool,
    pub expansion: ExpansionState,

    // List
    rows: Vec<Row>,
    pub cursor: Option<RowKey>,
    /// First rendered line of the list.
    pub list_scroll: usize,
    /// Rows drawn on the last frame.
    pub row_hitboxes: Vec<RowHitbox>,

    pub focus: Focus,
    pub editor: LivePreview,

    pub last_area: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, categories: &'static [Category]) -> Self {
        let theme = Theme::from_color_theme(config.theme);
        let mut app = Self {
            color_theme: config.theme,
            theme,
            categories,
            category_names: category_names(categories),
            linker: ReferenceLinker::new(config.reference_base_url),
            search_input: SingleLineInput::new(),
            query: SearchQuery::default(),
            expand_all: config.expand_all,
            expansion: ExpansionState::new(),
            rows: Vec::new(),
            cursor: None,
            list_scroll: 0,
            row_hitboxes: Vec::new(),
            focus: Focus::default(),
            editor: LivePreview::new(theme),
            last_area: Rect::default(),
            should_quit: false,
        };
        app.sync_view();
        app
    }

    /// Seed the search box, as if the text had been typed.
    pub fn with_query(mut self, raw: &str) -> Self {
        self.search_input.set_value(raw);
        self.set_query(raw);
        self.sync_view();
        self
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category_names(&self) -> &[String] {
        &self.category_names
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Label of the expand-all button for the current flag.
    pub fn expand_all_label(&self) -> &'static str {
        if self.expand_all {
            "Collapse All"
        } else {
            "Expand All"
        }
    }

    pub fn is_category_expanded(&self, index: usize) -> bool {
        self.categories
            .get(index)
            .is_some_and(|c| self.expansion.is_expanded(c.name))
    }

    /// Whether a row with `key` is present and not hidden.
    pub fn is_row_visible(&self, key: RowKey) -> bool {
        self.rows.iter().any(|r| r.key == key && !r.hidden)
    }

    pub fn current_layout(&self) -> AppLayout {
        AppLayout::calculate(self.last_area, self.editor.is_expanded())
    }

    pub(crate) fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
    }

    /// Re-run the reactive expansion rule, rebuild rows and re-anchor the
    /// cursor. Runs after every update.
    pub(crate) fn sync_view(&mut self) {
        self.expansion.sync(&self.category_names, self.expand_all);
        self.rows = rows::build_rows(self.categories, &self.query, &self.expansion);
        self.cursor = rows::fix_cursor(&self.rows, self.cursor);
    }
}
