//! String-based Tag Collection
//!
//! A sorted `SmallVec<String>` implementation of [`TagCollection`]. Insertion order is
//! irrelevant to the active filter set, so labels are kept sorted for binary-search lookups.

use std::string::ToString;

use smallvec::SmallVec;

use crate::tags::collection::TagCollection;

/// A string-based tag collection using `SmallVec<[String; 5]>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTagCollection {
    tags: SmallVec<[String; 5]>,
}

impl StringTagCollection {
    /// Create a new string tag collection, sorting and removing duplicates.
    #[must_use]
    pub fn new(tags: SmallVec<[String; 5]>) -> Self {
        let mut collection = Self { tags };

        collection.tags.sort();
        collection.tags.dedup();

        collection
    }

    /// Create a new string tag collection from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        Self::new(
            tags.iter()
                .map(ToString::to_string)
                .collect::<SmallVec<[String; 5]>>(),
        )
    }

    fn position(&self, tag: &str) -> Result<usize, usize> {
        self.tags.binary_search_by(|probe| probe.as_str().cmp(tag))
    }
}

impl TagCollection for StringTagCollection {
    fn contains(&self, tag: &str) -> bool {
        self.position(tag).is_ok()
    }

    fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn add(&mut self, tag: &str) {
        if let Err(pos) = self.position(tag) {
            self.tags.insert(pos, tag.to_string());
        }
    }

    fn remove(&mut self, tag: &str) {
        if let Ok(pos) = self.position(tag) {
            self.tags.remove(pos);
        }
    }

    fn clear(&mut self) {
        self.tags.clear();
    }

    fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}
