//! Tag Collection
//!
//! A set-like collection of tag labels used as the active filter set.

use std::fmt;

/// Trait for tag collections that back the shared filter state.
pub trait TagCollection: Clone + fmt::Debug + PartialEq + Default {
    /// Create an empty collection.
    fn empty() -> Self {
        Self::default()
    }

    /// Check if this collection contains a specific tag.
    ///
    /// Matching is exact and case-sensitive.
    fn contains(&self, tag: &str) -> bool;

    /// Check if this collection is empty.
    fn is_empty(&self) -> bool;

    /// Get the number of tags in this collection.
    fn len(&self) -> usize;

    /// Add a tag to this collection. Adding a tag twice is a no-op.
    fn add(&mut self, tag: &str);

    /// Remove a tag from this collection. Removing a missing tag is a no-op.
    fn remove(&mut self, tag: &str);

    /// Remove every tag from this collection.
    fn clear(&mut self);

    /// Iterate over the tags in this collection.
    fn iter(&self) -> impl Iterator<Item = &str>;

    /// Add the tag if it is absent, remove it if present.
    ///
    /// Returns `true` when the tag is present after the call.
    fn toggle(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            self.remove(tag);

            false
        } else {
            self.add(tag);

            true
        }
    }
}
