//! Cursor movement over the list rows.

use cheatsheet_config::constants::DEFAULT_PAGE_ROWS;

use crate::app::App;
use crate::app::rows::{self, RowKey};

impl App {
    pub(crate) fn move_cursor(&mut self, delta: isize) {
        self.cursor = rows::step_cursor(self.rows(), self.cursor, delta);
    }

    pub(crate) fn cursor_home(&mut self) {
        self.cursor = rows::step_cursor(self.rows(), self.cursor, isize::MIN);
    }

    pub(crate) fn cursor_end(&mut self) {
        self.cursor = rows::step_cursor(self.rows(), self.cursor, isize::MAX);
    }

    /// Rows moved by PageUp/PageDown: the rows drawn last frame, or a default
    /// before the first draw.
    pub(crate) fn page_rows(&self) -> usize {
        match self.row_hitboxes.len() {
            0 | 1 => DEFAULT_PAGE_ROWS,
            n => n - 1,
        }
    }

    pub(crate) fn select_row(&mut self, key: RowKey) {
        if self.is_row_visible(key) {
            self.cursor = Some(key);
        }
    }

    /// Activate the row under the cursor. Category rows toggle; element rows
    /// have nothing to activate.
    pub(crate) fn activate_cursor(&mut self) {
        if let Some(RowKey::Category(index)) = self.cursor {
            self.toggle_category(index);
        }
    }

    pub(crate) fn toggle_category(&mut self, index: usize) {
        let Some(category) = self.categories().get(index) else {
            tracing::warn!(index, "Toggle for unknown category ignored");
            return;
        };
        self.expansion.toggle(category.name);
        self.cursor = Some(RowKey::Category(index));
    }
}
