//! Tag Lists
//!
//! The ordered labels attached to a single card, parsed from a comma-separated string.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::tags::collection::TagCollection;

/// Ordered, trimmed, non-empty tag labels in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: SmallVec<[String; 5]>,
}

impl TagList {
    /// Parse a comma-separated tag string.
    ///
    /// Segments are trimmed and empty segments dropped, so stray commas and
    /// whitespace are tolerated. Labels are matched case-sensitively and are not
    /// otherwise normalised. A label repeated later in the string is skipped.
    pub fn parse(raw: &str) -> Self {
        let mut seen = FxHashSet::default();

        let tags = raw
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .filter(|tag| seen.insert(*tag))
            .map(ToString::to_string)
            .collect();

        Self { tags }
    }

    /// Returns true if any label in this list is present in `active`.
    pub fn any_in<T: TagCollection>(&self, active: &T) -> bool {
        self.tags.iter().any(|tag| active.contains(tag))
    }

    /// Iterate over the labels in document order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if the list has no labels.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
