//! Items
//!
//! Filterable cards and the registry that owns them in document order.

use slotmap::new_key_type;

use crate::tags::{collection::TagCollection, list::TagList};

pub mod registry;

new_key_type! {
    /// Item Key
    pub struct ItemKey;
}

/// A filterable card annotated with a comma-separated tag string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    raw_tags: String,
    tags: TagList,
}

impl Item {
    /// Creates a new item, parsing `raw_tags` once.
    pub fn new(title: impl Into<String>, raw_tags: impl Into<String>) -> Self {
        let raw_tags = raw_tags.into();
        let tags = TagList::parse(&raw_tags);

        Self {
            title: title.into(),
            raw_tags,
            tags,
        }
    }

    /// Returns the title of the item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tag string exactly as it was supplied.
    pub fn raw_tags(&self) -> &str {
        &self.raw_tags
    }

    /// Returns the parsed tags.
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// Replace the tag string and re-parse it.
    pub fn set_tags(&mut self, raw_tags: impl Into<String>) {
        self.raw_tags = raw_tags.into();
        self.tags = TagList::parse(&self.raw_tags);
    }

    /// Returns true if the item passes the active filter.
    ///
    /// Every item matches an empty filter; otherwise at least one of the item's
    /// tags must be active.
    pub fn matches<T: TagCollection>(&self, active: &T) -> bool {
        active.is_empty() || self.tags.any_in(active)
    }
}
