//! Board
//!
//! One page session: the shared filter state, the registered cards, the page state
//! and the controls bound to them. The board is the only writer. Every mutation goes
//! through `&mut self`, and before it returns the board recomputes the matched
//! collection, applies the page policy and hands a fresh [`BoardSnapshot`] to its
//! [`BoardObserver`].

use tracing::debug;

use crate::{
    config::BoardConfig,
    controls::{ClearFilters, Presence, TagToggle, TagVariant},
    filter::{FilterState, ToggleOutcome},
    items::{
        Item, ItemKey,
        registry::{ItemRegistry, MatchedCollection},
    },
    pagination::{
        PageState,
        controls::{ControlsModel, PaginationControls},
    },
    tags::collection::TagCollection,
    views::PaginatedView,
};

/// Receives a snapshot after every change to a [`Board`].
pub trait BoardObserver {
    /// Called synchronously once the board has recomputed its derived state.
    fn on_change(&mut self, snapshot: &BoardSnapshot);
}

/// Observer that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BoardObserver for NoopObserver {
    fn on_change(&mut self, _snapshot: &BoardSnapshot) {}
}

impl<F: FnMut(&BoardSnapshot)> BoardObserver for F {
    fn on_change(&mut self, snapshot: &BoardSnapshot) {
        self(snapshot);
    }
}

/// Render state of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    /// Registry key.
    pub key: ItemKey,

    /// Card title.
    pub title: String,

    /// Parsed tags, in document order.
    pub tags: Vec<String>,

    /// Whether the card passes the active filter.
    pub filtered: bool,

    /// Rank among matched cards, if matched.
    pub rank: Option<usize>,

    /// Whether the card is on the current page.
    pub visible: bool,
}

/// Render state of one tag toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleState {
    /// Bound label.
    pub label: String,

    /// Current variant.
    pub variant: TagVariant,
}

/// Everything a rendering layer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Every card, in document order.
    pub cards: Vec<CardState>,

    /// Active tags, sorted.
    pub active_tags: Vec<String>,

    /// Tag toggles, in the order they were added.
    pub toggles: Vec<ToggleState>,

    /// Clear-filters button presence across the last change.
    pub clear: Presence,

    /// Number of matched cards.
    pub matched: usize,

    /// Current one-based page.
    pub current_page: usize,

    /// Pagination controls, absent when there is at most one page.
    pub controls: Option<ControlsModel>,
}

impl BoardSnapshot {
    /// Cards on the current page.
    pub fn visible_cards(&self) -> impl Iterator<Item = &CardState> {
        self.cards.iter().filter(|card| card.visible)
    }

    /// Whether the clear-filters button is shown.
    pub fn clear_visible(&self) -> bool {
        self.clear.is_present()
    }

    /// Whether the clear-filters button is in the tree, including its exit animation.
    pub fn clear_mounted(&self) -> bool {
        self.clear.is_mounted()
    }
}

/// A page of filterable, paginated cards.
#[derive(Debug)]
pub struct Board<O: BoardObserver = NoopObserver> {
    config: BoardConfig,
    filter: FilterState,
    registry: ItemRegistry,
    page: PageState,
    controls: PaginationControls,
    toggles: Vec<TagToggle>,
    clear: ClearFilters,
    clear_presence: Presence,
    observer: O,
}

impl Board {
    /// Create an empty board without an observer.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<O: BoardObserver> Board<O> {
    /// Create an empty board that reports changes to `observer`.
    pub fn with_observer(config: BoardConfig, observer: O) -> Self {
        Self {
            config,
            filter: FilterState::new(),
            registry: ItemRegistry::new(),
            page: PageState::default(),
            controls: PaginationControls::new(config.page_size),
            toggles: Vec::new(),
            clear: ClearFilters,
            clear_presence: Presence::Hidden,
            observer,
        }
    }

    /// Board configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The shared filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The registered cards.
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// The page state.
    pub fn page(&self) -> &PageState {
        &self.page
    }

    /// The tag toggles.
    pub fn toggles(&self) -> &[TagToggle] {
        &self.toggles
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Paginated visibility over the current state.
    pub fn view(&self) -> PaginatedView<'_> {
        PaginatedView::new(
            &self.registry,
            &self.filter,
            &self.page,
            self.config.page_size,
        )
    }

    /// Matched cards under the current filter.
    pub fn matched(&self) -> MatchedCollection {
        self.registry.matched(self.filter.active())
    }

    /// Page count for the current filter.
    pub fn total_pages(&self) -> usize {
        self.controls.total_pages(self.matched().len())
    }

    /// Add a tag toggle, returning its index.
    pub fn add_toggle(&mut self, toggle: TagToggle) -> usize {
        self.toggles.push(toggle);
        self.refresh();

        self.toggles.len().saturating_sub(1)
    }

    /// Append a card.
    pub fn register_item(&mut self, item: Item) -> ItemKey {
        let key = self.registry.register(item);
        self.refresh();

        key
    }

    /// Insert a card at document position `index`.
    pub fn insert_item_at(&mut self, index: usize, item: Item) -> ItemKey {
        let key = self.registry.insert_at(index, item);
        self.refresh();

        key
    }

    /// Remove a card.
    pub fn remove_item(&mut self, key: ItemKey) -> Option<Item> {
        let item = self.registry.remove(key)?;
        self.refresh();

        Some(item)
    }

    /// Replace a card's tag string. Returns false if the card is unknown.
    pub fn set_item_tags(&mut self, key: ItemKey, raw_tags: &str) -> bool {
        let Some(item) = self.registry.get_mut(key) else {
            return false;
        };

        item.set_tags(raw_tags);
        self.refresh();

        true
    }

    /// Toggle `label` in the shared filter state.
    pub fn toggle_tag(&mut self, label: &str) -> ToggleOutcome {
        let outcome = self.filter.toggle(label);

        if outcome.changed() {
            self.refresh();
        }

        outcome
    }

    /// Activate the toggle at `index`. Returns `None` if there is no such toggle.
    pub fn activate_toggle(&mut self, index: usize) -> Option<ToggleOutcome> {
        let outcome = self.toggles.get(index)?.activate(&mut self.filter);

        if outcome.changed() {
            self.refresh();
        }

        Some(outcome)
    }

    /// Activate the clear-filters button.
    pub fn clear_tags(&mut self) -> bool {
        let cleared = self.clear.activate(&mut self.filter);

        if cleared {
            self.refresh();
        }

        cleared
    }

    /// Move to the next page. Returns false on the last page.
    pub fn next_page(&mut self) -> bool {
        let matched = self.matched().len();
        let moved = self.controls.next(&mut self.page, matched);

        if moved {
            self.refresh();
        }

        moved
    }

    /// Move to the previous page. Returns false on the first page.
    pub fn prev_page(&mut self) -> bool {
        let moved = self.controls.prev(&mut self.page);

        if moved {
            self.refresh();
        }

        moved
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snapshot_from(&self.matched())
    }

    fn snapshot_from(&self, matched: &MatchedCollection) -> BoardSnapshot {
        let window = self.page.window(self.config.page_size);

        let cards = self
            .registry
            .iter()
            .map(|(key, item)| {
                let rank = matched.rank_of(key);

                CardState {
                    key,
                    title: item.title().to_string(),
                    tags: item.tags().iter().map(ToString::to_string).collect(),
                    filtered: rank.is_some(),
                    rank,
                    visible: rank.is_some_and(|rank| window.contains(rank)),
                }
            })
            .collect();

        let toggles = self
            .toggles
            .iter()
            .map(|toggle| ToggleState {
                label: toggle.label().to_string(),
                variant: toggle.variant(&self.filter),
            })
            .collect();

        BoardSnapshot {
            cards,
            active_tags: self.filter.active().iter().map(ToString::to_string).collect(),
            toggles,
            clear: self.clear_presence,
            matched: matched.len(),
            current_page: self.page.current_page(),
            controls: self.controls.render(&self.page, matched.len()),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn refresh(&mut self) {
        let matched = self.matched();
        let total_pages = self.controls.total_pages(matched.len());

        self.config.page_policy.apply(&mut self.page, total_pages);
        self.clear_presence = self.clear_presence.advance(self.clear.is_visible(&self.filter));

        let snapshot = self.snapshot_from(&matched);

        debug!(
            matched = snapshot.matched,
            total_pages,
            current_page = snapshot.current_page,
            "board recomputed"
        );

        self.observer.on_change(&snapshot);
    }
}
