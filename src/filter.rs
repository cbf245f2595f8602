//! Shared Filter State
//!
//! The set of active tag labels for one page session. Dependents never cache a
//! copy: [`Board`](crate::board::Board) recomputes them after every mutation.

use tracing::{debug, warn};

use crate::tags::{collection::TagCollection, string::StringTagCollection};

/// Result of toggling a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The label was absent and is now active.
    Added,

    /// The label was active and has been removed.
    Removed,

    /// The label was empty; the state is unchanged.
    Ignored,
}

impl ToggleOutcome {
    /// Returns true if the toggle changed the active set.
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Active tag labels shared by every control and card on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState<T: TagCollection = StringTagCollection> {
    active: T,
}

impl<T: TagCollection> FilterState<T> {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self { active: T::empty() }
    }

    /// The active tag labels.
    pub fn active(&self) -> &T {
        &self.active
    }

    /// Returns true if `label` is active.
    pub fn contains(&self, label: &str) -> bool {
        self.active.contains(label)
    }

    /// Returns true if no label is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Add `label` if absent, remove it if present.
    ///
    /// Empty or whitespace-only labels are logged and ignored.
    pub fn toggle(&mut self, label: &str) -> ToggleOutcome {
        if label.trim().is_empty() {
            warn!("tag toggle is missing a label; ignoring");

            return ToggleOutcome::Ignored;
        }

        let outcome = if self.active.toggle(label) {
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Removed
        };

        debug!(label, ?outcome, active = self.active.len(), "toggled tag");

        outcome
    }

    /// Remove every active label.
    ///
    /// Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        if self.active.is_empty() {
            return false;
        }

        self.active.clear();

        debug!("cleared active tags");

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FilterState::<StringTagCollection>::new();

        assert_eq!(state.toggle("a"), ToggleOutcome::Added);
        assert!(state.contains("a"));

        assert_eq!(state.toggle("a"), ToggleOutcome::Removed);
        assert!(!state.contains("a"));
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_ignores_empty_label() {
        let mut state = FilterState::<StringTagCollection>::new();

        assert_eq!(state.toggle(""), ToggleOutcome::Ignored);
        assert_eq!(state.toggle("   "), ToggleOutcome::Ignored);
        assert!(state.is_empty());
    }

    #[test]
    fn clear_on_empty_state_is_noop() {
        let mut state = FilterState::<StringTagCollection>::new();

        assert!(!state.clear());
        assert!(state.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let mut state = FilterState::<StringTagCollection>::new();
        state.toggle("a");
        state.toggle("b");

        assert!(state.clear());
        assert!(state.is_empty());
    }
}
