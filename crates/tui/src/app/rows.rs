//! Row tree for the cheatsheet list.
//!
//! Responsibilities:
//! - Compose catalogue, search query and expansion state into an ordered
//!   list of rows.
//! - Keep the cursor on a stable `RowKey` across filter and expansion
//!   changes.
//!
//! Does NOT handle:
//! - Drawing rows (see `ui::screens::cheatsheet`).
//!
//! Invariants:
//! - Every category has exactly one row, in catalogue order.
//! - Element rows exist only under expanded categories.
//! - Rows that fail the filter stay in the tree with `hidden = true`, so
//!   keys never shift when the query changes.
//! - An element's visibility depends only on its category's visibility and
//!   on its own match, never on its siblings.

use cheatsheet_catalogue::{Category, SearchQuery, matches_category, matches_element};

use crate::app::expansion::ExpansionState;

/// Stable identity of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    /// Category by display index.
    Category(usize),
    /// Element by (category index, element index).
    Element(usize, usize),
}

impl RowKey {
    pub fn category_index(self) -> usize {
        match self {
            RowKey::Category(c) | RowKey::Element(c, _) => c,
        }
    }
}

/// One entry of the list tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub hidden: bool,
}

/// Whether a category row is shown under `query`.
pub fn category_visible(category: &Category, query: &SearchQuery) -> bool {
    matches_category(category, query)
}

/// Whether an element entry is shown under `query`, independent of expansion.
pub fn element_visible(
    category: &Category,
    element_index: usize,
    query: &SearchQuery,
) -> bool {
    category_visible(category, query)
        && category
            .elements
            .get(element_index)
            .is_some_and(|element| matches_element(element, query))
}

/// Build the row tree.
pub fn build_rows(
    categories: &[Category],
    query: &SearchQuery,
    expansion: &ExpansionState,
) -> Vec<Row> {
    let mut rows = Vec::new();
    for (ci, category) in categories.iter().enumerate() {
        let category_hidden = !category_visible(category, query);
        rows.push(Row {
            key: RowKey::Category(ci),
            hidden: category_hidden,
        });

        if !expansion.is_expanded(category.name) {
            continue;
        }
        for (ei, element) in category.elements.iter().enumerate() {
            rows.push(Row {
                key: RowKey::Element(ci, ei),
                hidden: category_hidden || !matches_element(element, query),
            });
        }
    }
    rows
}

/// Re-anchor `cursor` after the rows changed.
///
/// A key that no longer exists (its category collapsed) falls back to its
/// category row. A hidden row moves to the nearest visible row, preferring
/// the earlier one on ties. Returns `None` when nothing is visible.
pub fn fix_cursor(rows: &[Row], cursor: Option<RowKey>) -> Option<RowKey> {
    let first_visible = || rows.iter().find(|r| !r.hidden).map(|r| r.key);

    let Some(key) = cursor else {
        return first_visible();
    };

    let position = rows
        .iter()
        .position(|r| r.key == key)
        .or_else(|| {
            let category = RowKey::Category(key.category_index());
            rows.iter().position(|r| r.key == category)
        });
    let Some(position) = position else {
        return first_visible();
    };

    if !rows[position].hidden {
        return Some(rows[position].key);
    }
    nearest_visible(rows, position).map(|i| rows[i].key)
}

fn nearest_visible(rows: &[Row], position: usize) -> Option<usize> {
    for distance in 1..rows.len() {
        if let Some(before) = position.checked_sub(distance)
            && !rows[before].hidden
        {
            return Some(before);
        }
        let after = position + distance;
        if after < rows.len() && !rows[after].hidden {
            return Some(after);
        }
    }
    None
}

/// Indices of visible rows, in order.
pub fn visible_positions(rows: &[Row]) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, r)| !r.hidden)
        .map(|(i, _)| i)
        .collect()
}

/// Move `cursor` by `delta` visible rows, clamping at both ends.
pub fn step_cursor(rows: &[Row], cursor: Option<RowKey>, delta: isize) -> Option<RowKey> {
    let visible = visible_positions(rows);
    if visible.is_empty() {
        return None;
    }
    let current = cursor
        .and_then(|key| visible.iter().position(|&i| rows[i].key == key))
        .unwrap_or(0);
    let target = current
        .saturating_add_signed(delta)
        .min(visible.len() - 1);
    Some(rows[visible[target]].key)
}
