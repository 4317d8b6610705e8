//! Tests for category expansion.
//!
//! This module tests:
//! - Manual toggles via keyboard and actions
//! - The expand-all flag and its toolbar button
//! - Algebraic properties of the expansion state
//!
//! ## Invariants
//! - Changing the expand-all flag recomputes the open set from scratch
//! - Manual toggles persist until the flag next changes

mod helpers;
use helpers::*;
use cheatsheet_tui::app::ExpansionState;
use cheatsheet_tui::{Action, RowKey};
use proptest::prelude::*;

fn names() -> Vec<String> {
    cheatsheet_catalogue::category_names(cheatsheet_catalogue::CATALOGUE)
}

#[test]
fn test_expand_all_button_round_trip() {
    let mut app = test_app(false);
    let total = app.categories().len();
    assert_eq!(app.expand_all_label(), "Expand All");
    assert_eq!(app.expansion.open_count(), 0);

    app.update(Action::ToggleExpandAll);
    assert_eq!(app.expand_all_label(), "Collapse All");
    assert_eq!(app.expansion.open_count(), total);

    app.update(Action::ToggleExpandAll);
    assert_eq!(app.expand_all_label(), "Expand All");
    assert_eq!(app.expansion.open_count(), 0);
}

#[test]
fn test_enter_on_category_toggles() {
    let mut app = test_app(false);
    assert_eq!(app.cursor, Some(RowKey::Category(0)));

    press(&mut app, enter_key());
    assert!(app.is_category_expanded(0));
    assert!(app.rows().iter().any(|r| matches!(r.key, RowKey::Element(0, _))));

    press(&mut app, key(' '));
    assert!(!app.is_category_expanded(0));
    assert!(!app.rows().iter().any(|r| matches!(r.key, RowKey::Element(0, _))));
}

#[test]
fn test_expand_all_discards_manual_collapse() {
    let mut app = test_app(true);
    app.update(Action::ToggleCategory(2));
    assert!(!app.is_category_expanded(2));

    // Unrelated updates keep the manual change
    app.update(Action::CursorDown);
    app.update(Action::SearchChanged("list".to_string()));
    assert!(!app.is_category_expanded(2));

    app.update(Action::ToggleExpandAll);
    app.update(Action::ToggleExpandAll);
    assert!(app.is_category_expanded(2));
}

#[test]
fn test_f2_toggles_from_any_focus() {
    let mut app = test_app(false);
    press(&mut app, key('/'));
    assert_eq!(press(&mut app, f_key(2)), Some(Action::ToggleExpandAll));
    assert!(app.expand_all);
    // F2 is not typed into the search box
    assert!(app.search_input.is_empty());
}

#[test]
fn test_unknown_category_toggle_is_ignored() {
    let mut app = test_app(false);
    app.update(Action::ToggleCategory(999));
    assert_eq!(app.expansion.open_count(), 0);
}

proptest! {
    #[test]
    fn prop_toggle_twice_is_identity(ops in prop::collection::vec(0usize..12, 0..20), target in 0usize..12) {
        let names = names();
        let mut state = ExpansionState::new();
        for i in ops {
            state.toggle(&names[i % names.len()]);
        }
        let before = state.open_set().clone();
        let name = &names[target % names.len()];
        state.toggle(name);
        state.toggle(name);
        prop_assert_eq!(state.open_set(), &before);
    }

    #[test]
    fn prop_set_all_and_clear_all_idempotent(ops in prop::collection::vec(0usize..12, 0..20)) {
        let names = names();
        let mut state = ExpansionState::new();
        for i in ops {
            state.toggle(&names[i % names.len()]);
        }

        state.set_all(&names);
        let once = state.open_set().clone();
        state.set_all(&names);
        prop_assert_eq!(state.open_set(), &once);
        prop_assert_eq!(once.len(), names.len());

        state.clear_all();
        state.clear_all();
        prop_assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn prop_flag_change_overrides_toggles(ops in prop::collection::vec(0usize..12, 0..20), start in any::<bool>()) {
        let mut app = test_app(start);
        let total = app.categories().len();
        for i in ops {
            app.update(Action::ToggleCategory(i % total));
        }
        app.update(Action::ToggleExpandAll);
        let expected = if start { 0 } else { total };
        prop_assert_eq!(app.expansion.open_count(), expected);
    }
}
