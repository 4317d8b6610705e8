//! Category expansion state.
//!
//! Responsibilities:
//! - Track which categories are open.
//! - Apply single toggles and global expand/collapse.
//! - Re-derive the open set whenever its inputs (category names, expand-all
//!   flag) change.
//!
//! Does NOT handle:
//! - Search filtering; hidden categories keep their expansion.
//!
//! Invariants:
//! - A name is in the open set iff its category is expanded.
//! - `sync` replaces the open set wholesale when its inputs differ from the
//!   last sync, discarding manual toggles.

use std::collections::HashSet;

/// Open set for a fixed list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<String>,
    synced: Option<(Vec<String>, bool)>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.open.contains(name)
    }

    /// Flip one category.
    pub fn toggle(&mut self, name: &str) {
        if !self.open.remove(name) {
            self.open.insert(name.to_string());
        }
    }

    /// Open exactly the given categories.
    pub fn set_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.open = names.into_iter().map(Into::into).collect();
    }

    pub fn clear_all(&mut self) {
        self.open.clear();
    }

    pub fn open_set(&self) -> &HashSet<String> {
        &self.open
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Re-derive the open set if `names` or `expand_all` changed since the
    /// last call. Returns whether a recompute happened.
    pub fn sync(&mut self, names: &[String], expand_all: bool) -> bool {
        let unchanged = self
            .synced
            .as_ref()
            .is_some_and(|(last_names, last_flag)| last_names == names && *last_flag == expand_all);
        if unchanged {
            return false;
        }

        self.open = recompute(names, expand_all);
        self.synced = Some((names.to_vec(), expand_all));
        tracing::debug!(expand_all, open = self.open.len(), "Recomputed expansion state");
        true
    }
}

/// The open set implied by the expand-all flag alone.
pub fn recompute(names: &[String], expand_all: bool) -> HashSet<String> {
    if expand_all {
        names.iter().cloned().collect()
    } else {
        HashSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        ["Lists", "Links", "Tables"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut state = ExpansionState::new();
        state.toggle("Lists");
        assert!(state.is_expanded("Lists"));
        state.toggle("Lists");
        assert!(!state.is_expanded("Lists"));
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn test_set_all_and_clear_all_are_idempotent() {
        let mut state = ExpansionState::new();
        state.set_all(names());
        let once = state.clone();
        state.set_all(names());
        assert_eq!(state, once);
        assert_eq!(state.open_count(), 3);

        state.clear_all();
        state.clear_all();
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn test_recompute_is_pure() {
        assert_eq!(recompute(&names(), true).len(), 3);
        assert!(recompute(&names(), false).is_empty());
    }

    #[test]
    fn test_sync_only_fires_on_changed_inputs() {
        let mut state = ExpansionState::new();
        assert!(state.sync(&names(), false));
        state.toggle("Links");
        assert!(!state.sync(&names(), false));
        assert!(state.is_expanded("Links"), "unchanged inputs keep manual toggles");

        assert!(state.sync(&names(), true));
        assert_eq!(state.open_count(), 3);
    }

    #[test]
    fn test_sync_overrides_manual_toggles() {
        let mut state = ExpansionState::new();
        state.sync(&names(), true);
        state.toggle("Links");
        assert!(!state.is_expanded("Links"));

        state.sync(&names(), false);
        assert_eq!(state.open_count(), 0);
        state.toggle("Tables");
        state.sync(&names(), true);
        assert_eq!(state.open_count(), 3);
    }

    #[test]
    fn test_sync_recomputes_when_names_change() {
        let mut state = ExpansionState::new();
        state.sync(&names(), true);
        let fewer: Vec<String> = names().into_iter().take(1).collect();
        assert!(state.sync(&fewer, true));
        assert_eq!(state.open_count(), 1);
    }
}
