//! Tagfilter
//!
//! Tag-based filtering and pagination for card listings. A [`board::Board`] owns
//! the active tag set, the cards in document order and the current page, and
//! recomputes what every card and control should show after each interaction.

pub mod board;
pub mod config;
pub mod controls;
pub mod filter;
pub mod fixtures;
pub mod items;
pub mod pagination;
pub mod prelude;
pub mod render;
pub mod tags;
pub mod utils;
pub mod views;
