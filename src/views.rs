//! Views
//!
//! Per-item visibility decisions. Views borrow the live registry, filter and page
//! state, so every answer is computed from the state as it is at the time of the call.

use crate::{
    filter::FilterState,
    items::{ItemKey, registry::ItemRegistry},
    pagination::{PageState, PageWindow},
    tags::{collection::TagCollection, string::StringTagCollection},
};

/// Visibility from tag matching alone, for listings without pagination.
#[derive(Debug, Clone)]
pub struct FilteredView<'a, T: TagCollection = StringTagCollection> {
    registry: &'a ItemRegistry,
    filter: &'a FilterState<T>,
}

impl<'a, T: TagCollection> FilteredView<'a, T> {
    /// Create a view over `registry` filtered by `filter`.
    pub fn new(registry: &'a ItemRegistry, filter: &'a FilterState<T>) -> Self {
        Self { registry, filter }
    }

    /// Returns true if the item is matched. Unknown items are not visible.
    pub fn is_visible(&self, key: ItemKey) -> bool {
        self.registry
            .get(key)
            .is_some_and(|item| item.matches(self.filter.active()))
    }
}

/// Visibility from tag matching and the current page window.
#[derive(Debug, Clone)]
pub struct PaginatedView<'a, T: TagCollection = StringTagCollection> {
    registry: &'a ItemRegistry,
    filter: &'a FilterState<T>,
    page: &'a PageState,
    page_size: usize,
}

impl<'a, T: TagCollection> PaginatedView<'a, T> {
    /// Create a view over `registry` filtered by `filter`, showing `page`.
    pub fn new(
        registry: &'a ItemRegistry,
        filter: &'a FilterState<T>,
        page: &'a PageState,
        page_size: usize,
    ) -> Self {
        Self {
            registry,
            filter,
            page,
            page_size,
        }
    }

    /// The window of ranks shown on the current page.
    pub fn window(&self) -> PageWindow {
        self.page.window(self.page_size)
    }

    /// Zero-based rank of the item among all matched items, in document order.
    ///
    /// Unmatched and unknown items have no rank.
    pub fn rank(&self, key: ItemKey) -> Option<usize> {
        let active = self.filter.active();

        if !self.registry.get(key)?.matches(active) {
            return None;
        }

        self.registry
            .iter()
            .filter(|(_, item)| item.matches(active))
            .position(|(candidate, _)| candidate == key)
    }

    /// Returns true if the item is matched and its rank falls on the current page.
    pub fn is_visible(&self, key: ItemKey) -> bool {
        self.rank(key).is_some_and(|rank| self.window().contains(rank))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{items::Item, pagination::PAGE_SIZE};

    use super::*;

    fn registry_of(count: usize, raw_tags: &str) -> (ItemRegistry, Vec<ItemKey>) {
        let mut registry = ItemRegistry::new();
        let keys = (0..count)
            .map(|index| registry.register(Item::new(format!("Card {index}"), raw_tags)))
            .collect();

        (registry, keys)
    }

    #[test]
    fn second_page_shows_ranks_nine_to_seventeen() {
        let (registry, keys) = registry_of(20, "x");
        let filter = FilterState::<StringTagCollection>::new();
        let page = PageState::new(2);
        let view = PaginatedView::new(&registry, &filter, &page, PAGE_SIZE);

        let visible: Vec<usize> = keys
            .iter()
            .enumerate()
            .filter(|(_, key)| view.is_visible(**key))
            .map(|(index, _)| index)
            .collect();

        assert_eq!(visible, (9..18).collect::<Vec<_>>());
    }

    #[test]
    fn unmatched_items_are_hidden_and_unranked() -> TestResult {
        let mut registry = ItemRegistry::new();
        let hidden = registry.register(Item::new("Hidden", "x"));
        let shown = registry.register(Item::new("Shown", "y"));

        let mut filter = FilterState::<StringTagCollection>::new();
        filter.toggle("y");

        let page = PageState::default();
        let view = PaginatedView::new(&registry, &filter, &page, PAGE_SIZE);

        assert_eq!(view.rank(hidden), None);
        assert!(!view.is_visible(hidden));
        assert_eq!(view.rank(shown).ok_or("expected rank")?, 0);
        assert!(view.is_visible(shown));

        Ok(())
    }

    #[test]
    fn unregistered_item_is_not_visible() {
        let (registry, _) = registry_of(3, "x");
        let filter = FilterState::<StringTagCollection>::new();
        let page = PageState::default();
        let view = PaginatedView::new(&registry, &filter, &page, PAGE_SIZE);

        assert!(!view.is_visible(ItemKey::default()));
        assert!(!FilteredView::new(&registry, &filter).is_visible(ItemKey::default()));
    }

    #[test]
    fn filtered_view_ignores_pages() -> TestResult {
        let (registry, keys) = registry_of(12, "x");
        let filter = FilterState::<StringTagCollection>::new();
        let view = FilteredView::new(&registry, &filter);

        assert!(view.is_visible(*keys.last().ok_or("missing key")?));

        Ok(())
    }

    #[test]
    fn rank_is_recomputed_after_filter_change() -> TestResult {
        let mut registry = ItemRegistry::new();
        let first = registry.register(Item::new("First", "a"));
        let second = registry.register(Item::new("Second", "b"));

        let mut filter = FilterState::<StringTagCollection>::new();
        let page = PageState::default();

        assert_eq!(
            PaginatedView::new(&registry, &filter, &page, PAGE_SIZE).rank(second),
            Some(1)
        );

        filter.toggle("b");

        let view = PaginatedView::new(&registry, &filter, &page, PAGE_SIZE);

        assert_eq!(view.rank(first), None);
        assert_eq!(view.rank(second).ok_or("expected rank")?, 0);

        Ok(())
    }
}
