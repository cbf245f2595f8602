//! Tagfilter prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    board::{Board, BoardObserver, BoardSnapshot, CardState, NoopObserver, ToggleState},
    config::{BoardConfig, ConfigError},
    controls::{ClearFilters, DEFAULT_TAG_LABEL, Presence, TagToggle, TagToggleConfig, TagVariant},
    filter::{FilterState, ToggleOutcome},
    fixtures::{Fixture, FixtureError},
    items::{
        Item, ItemKey,
        registry::{ItemRegistry, MatchedCollection},
    },
    pagination::{
        PAGE_SIZE, PagePolicy, PageState, PageWindow,
        controls::{ControlsModel, PaginationControls},
        total_pages,
    },
    tags::{collection::TagCollection, list::TagList, string::StringTagCollection},
    views::{FilteredView, PaginatedView},
};
