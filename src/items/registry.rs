//! Item Registry
//!
//! Owns every card on a page in document order. The matched subsequence is derived
//! from the registry and the active tags on demand and is never stored by the registry.

use slotmap::{SecondaryMap, SlotMap};

use crate::{
    items::{Item, ItemKey},
    pagination::PageWindow,
    tags::collection::TagCollection,
};

/// Cards in document order.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: SlotMap<ItemKey, Item>,
    order: Vec<ItemKey>,
}

impl ItemRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item at the end of the document.
    pub fn register(&mut self, item: Item) -> ItemKey {
        let key = self.items.insert(item);
        self.order.push(key);

        key
    }

    /// Insert an item at document position `index`, or at the end if `index` is past it.
    pub fn insert_at(&mut self, index: usize, item: Item) -> ItemKey {
        let key = self.items.insert(item);
        let index = index.min(self.order.len());
        self.order.insert(index, key);

        key
    }

    /// Remove an item, returning it if it was registered.
    pub fn remove(&mut self, key: ItemKey) -> Option<Item> {
        let item = self.items.remove(key)?;
        self.order.retain(|existing| *existing != key);

        Some(item)
    }

    /// Get an item by key.
    pub fn get(&self, key: ItemKey) -> Option<&Item> {
        self.items.get(key)
    }

    /// Get an item by key, mutably.
    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.items.get_mut(key)
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Iterate over items in document order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &Item)> {
        self.order
            .iter()
            .filter_map(|key| self.items.get(*key).map(|item| (*key, item)))
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Compute the matched items under `active` with one indexed pass.
    pub fn matched<T: TagCollection>(&self, active: &T) -> MatchedCollection {
        let mut matched = MatchedCollection::default();

        for (key, item) in self.iter() {
            if item.matches(active) {
                matched.ranks.insert(key, matched.keys.len());
                matched.keys.push(key);
            }
        }

        matched
    }
}

/// Matched items in document order, with each item's zero-based rank.
#[derive(Debug, Clone, Default)]
pub struct MatchedCollection {
    keys: Vec<ItemKey>,
    ranks: SecondaryMap<ItemKey, usize>,
}

impl MatchedCollection {
    /// Rank of `key` among matched items, or `None` if it is unmatched or unknown.
    pub fn rank_of(&self, key: ItemKey) -> Option<usize> {
        self.ranks.get(key).copied()
    }

    /// Returns true if `key` is matched.
    pub fn is_matched(&self, key: ItemKey) -> bool {
        self.ranks.contains_key(key)
    }

    /// Number of matched items.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Matched keys in document order.
    pub fn keys(&self) -> &[ItemKey] {
        &self.keys
    }

    /// Matched keys whose rank falls inside `window`.
    pub fn page(&self, window: PageWindow) -> &[ItemKey] {
        let start = window.start.min(self.keys.len());
        let end = window.end.min(self.keys.len());

        self.keys.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::tags::string::StringTagCollection;

    use super::*;

    fn registry_with(tags: &[&str]) -> (ItemRegistry, Vec<ItemKey>) {
        let mut registry = ItemRegistry::new();

        let keys = tags
            .iter()
            .enumerate()
            .map(|(index, raw)| registry.register(Item::new(format!("Card {index}"), *raw)))
            .collect();

        (registry, keys)
    }

    #[test]
    fn iter_follows_document_order() -> TestResult {
        let (mut registry, keys) = registry_with(&["a", "b"]);
        let first = *keys.first().ok_or("missing key")?;

        let inserted = registry.insert_at(1, Item::new("Inserted", "c"));
        let appended = registry.insert_at(99, Item::new("Appended", "d"));

        let order: Vec<ItemKey> = registry.iter().map(|(key, _)| key).collect();

        assert_eq!(order.len(), 4);
        assert_eq!(order.first(), Some(&first));
        assert_eq!(order.get(1), Some(&inserted));
        assert_eq!(order.last(), Some(&appended));

        Ok(())
    }

    #[test]
    fn remove_drops_from_order() -> TestResult {
        let (mut registry, keys) = registry_with(&["a", "b", "c"]);
        let middle = *keys.get(1).ok_or("missing key")?;

        let removed = registry.remove(middle).ok_or("expected item")?;

        assert_eq!(removed.title(), "Card 1");
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(middle));
        assert!(registry.remove(middle).is_none());

        Ok(())
    }

    #[test]
    fn matched_ranks_follow_document_order() -> TestResult {
        let (registry, keys) = registry_with(&["a", "x", "a, b", "b", "y"]);
        let active = StringTagCollection::from_strs(&["a", "b"]);

        let matched = registry.matched(&active);

        assert_eq!(matched.len(), 3);
        assert_eq!(matched.rank_of(*keys.first().ok_or("missing key")?), Some(0));
        assert_eq!(matched.rank_of(*keys.get(1).ok_or("missing key")?), None);
        assert_eq!(matched.rank_of(*keys.get(2).ok_or("missing key")?), Some(1));
        assert_eq!(matched.rank_of(*keys.get(3).ok_or("missing key")?), Some(2));
        assert_eq!(matched.rank_of(*keys.get(4).ok_or("missing key")?), None);

        Ok(())
    }

    #[test]
    fn empty_filter_matches_all() {
        let (registry, keys) = registry_with(&["a", "", "b"]);

        let matched = registry.matched(&StringTagCollection::empty());

        assert_eq!(matched.len(), 3);
        assert!(keys.iter().all(|key| matched.is_matched(*key)));
    }

    #[test]
    fn unknown_key_has_no_rank() {
        let (registry, _) = registry_with(&["a"]);
        let matched = registry.matched(&StringTagCollection::empty());

        assert_eq!(matched.rank_of(ItemKey::default()), None);
        assert!(!matched.is_matched(ItemKey::default()));
    }

    #[test]
    fn page_slices_matched_keys() {
        let tags = vec!["x"; 20];
        let (registry, keys) = registry_with(&tags);
        let matched = registry.matched(&StringTagCollection::empty());

        let page = matched.page(PageWindow::new(2, 9));

        assert_eq!(page, keys.get(9..18).unwrap_or_default());

        let last = matched.page(PageWindow::new(3, 9));

        assert_eq!(last.len(), 2);
        assert!(matched.page(PageWindow::new(4, 9)).is_empty());
    }

    #[test]
    fn unmatched_items_are_excluded() {
        let (registry, keys) = registry_with(&["a", "b", "c"]);
        let matched = registry.matched(&StringTagCollection::from_strs(&["b"]));

        let flags: Vec<bool> = keys.iter().map(|key| matched.is_matched(*key)).collect();

        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(matched.keys(), keys.get(1..2).unwrap_or_default());
    }
}
