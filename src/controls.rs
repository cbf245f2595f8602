//! Filter Controls
//!
//! Tag toggle buttons and the clear-filters button. Neither control stores any
//! state of its own: everything they render is read from the [`FilterState`].

use serde::Deserialize;
use tracing::warn;

use crate::{
    filter::{FilterState, ToggleOutcome},
    tags::collection::TagCollection,
};

/// Label used when a toggle is configured without one.
pub const DEFAULT_TAG_LABEL: &str = "myTag";

fn default_label() -> String {
    DEFAULT_TAG_LABEL.to_string()
}

/// Configuration for a tag toggle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagToggleConfig {
    /// The tag label this toggle adds and removes. Must be non-empty to function.
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for TagToggleConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
        }
    }
}

/// Visual variant of a tag toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVariant {
    /// The label is in the active set.
    Active,

    /// The label is not in the active set.
    Inactive,
}

/// A button bound to one tag label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToggle {
    label: String,
}

impl TagToggle {
    /// Create a toggle bound to `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The bound label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns false for an empty or whitespace-only label.
    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }

    /// Toggle the bound label in the shared state.
    pub fn activate<T: TagCollection>(&self, state: &mut FilterState<T>) -> ToggleOutcome {
        if !self.has_label() {
            warn!("tag button is missing a label");

            return ToggleOutcome::Ignored;
        }

        state.toggle(&self.label)
    }

    /// Returns true if the bound label is active.
    pub fn is_active<T: TagCollection>(&self, state: &FilterState<T>) -> bool {
        self.has_label() && state.contains(&self.label)
    }

    /// The variant to render, read from the shared state.
    pub fn variant<T: TagCollection>(&self, state: &FilterState<T>) -> TagVariant {
        if self.is_active(state) {
            TagVariant::Active
        } else {
            TagVariant::Inactive
        }
    }
}

impl From<TagToggleConfig> for TagToggle {
    fn from(config: TagToggleConfig) -> Self {
        Self::new(config.label)
    }
}

/// Presence of an animated element across one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Hidden before, shown after.
    Entering,

    /// Shown before, hidden after.
    Exiting,

    /// Shown before and after.
    Shown,

    /// Hidden before and after.
    Hidden,
}

impl Presence {
    /// Presence for a visibility change from `before` to `after`.
    pub fn between(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, true) => Self::Entering,
            (true, false) => Self::Exiting,
            (true, true) => Self::Shown,
            (false, false) => Self::Hidden,
        }
    }

    /// Presence after the next change, given the new visibility.
    pub fn advance(self, visible: bool) -> Self {
        Self::between(self.is_present(), visible)
    }

    /// Returns true if the element is on screen once the transition settles.
    pub fn is_present(self) -> bool {
        matches!(self, Self::Entering | Self::Shown)
    }

    /// Returns true if the element must stay mounted, including while it animates out.
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// The clear-filters button, shown only while some tag is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearFilters;

impl ClearFilters {
    /// Returns true if the button should be shown.
    pub fn is_visible<T: TagCollection>(&self, state: &FilterState<T>) -> bool {
        !state.is_empty()
    }

    /// Clear the shared state. A hidden button is not interactive and does nothing.
    pub fn activate<T: TagCollection>(&self, state: &mut FilterState<T>) -> bool {
        if !self.is_visible(state) {
            return false;
        }

        state.clear()
    }
}

#[cfg(test)]
mod tests {
    use crate::tags::string::StringTagCollection;

    use super::*;

    #[test]
    fn toggle_variant_reads_shared_state() {
        let mut state = FilterState::<StringTagCollection>::new();
        let video = TagToggle::new("video");
        let image = TagToggle::new("image");

        assert_eq!(video.variant(&state), TagVariant::Inactive);

        video.activate(&mut state);

        assert_eq!(video.variant(&state), TagVariant::Active);
        assert_eq!(image.variant(&state), TagVariant::Inactive);

        // A change made elsewhere is reflected immediately.
        state.toggle("video");

        assert_eq!(video.variant(&state), TagVariant::Inactive);
    }

    #[test]
    fn toggle_with_empty_label_is_ignored() {
        let mut state = FilterState::<StringTagCollection>::new();

        for label in ["", "   "] {
            let toggle = TagToggle::new(label);

            assert!(!toggle.has_label());
            assert_eq!(toggle.activate(&mut state), ToggleOutcome::Ignored);
            assert!(state.is_empty());
            assert!(!toggle.is_active(&state));
            assert_eq!(toggle.variant(&state), TagVariant::Inactive);
        }

        assert!(TagToggle::new(" video ").has_label());
    }

    #[test]
    fn config_defaults_label() -> testresult::TestResult {
        let config: TagToggleConfig = serde_norway::from_str("{}")?;

        assert_eq!(config.label, "myTag");
        assert_eq!(TagToggle::from(config).label(), DEFAULT_TAG_LABEL);
        assert_eq!(TagToggleConfig::default().label, DEFAULT_TAG_LABEL);

        Ok(())
    }

    #[test]
    fn clear_visible_only_with_active_tags() {
        let mut state = FilterState::<StringTagCollection>::new();
        let clear = ClearFilters;

        assert!(!clear.is_visible(&state));

        state.toggle("a");

        assert!(clear.is_visible(&state));
        assert!(clear.activate(&mut state));
        assert!(!clear.is_visible(&state));
    }

    #[test]
    fn clear_on_empty_state_stays_hidden() {
        let mut state = FilterState::<StringTagCollection>::new();
        let clear = ClearFilters;

        assert!(!clear.activate(&mut state));
        assert!(state.is_empty());
        assert!(!clear.is_visible(&state));
    }

    #[test]
    fn presence_transitions() {
        assert_eq!(Presence::between(false, true), Presence::Entering);
        assert_eq!(Presence::between(true, false), Presence::Exiting);
        assert_eq!(Presence::between(true, true), Presence::Shown);
        assert_eq!(Presence::between(false, false), Presence::Hidden);

        assert!(Presence::Entering.is_present());
        assert!(!Presence::Exiting.is_present());
    }

    #[test]
    fn presence_advances_through_enter_and_exit() {
        let entering = Presence::Hidden.advance(true);
        let shown = entering.advance(true);
        let exiting = shown.advance(false);
        let hidden = exiting.advance(false);

        assert_eq!(entering, Presence::Entering);
        assert_eq!(shown, Presence::Shown);
        assert_eq!(exiting, Presence::Exiting);
        assert_eq!(hidden, Presence::Hidden);

        assert!(exiting.is_mounted());
        assert!(!hidden.is_mounted());
        assert_eq!(exiting.advance(true), Presence::Entering);
    }
}
