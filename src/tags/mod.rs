//! Tags
//!
//! Active filter tags are held in a [`collection::TagCollection`]; the tags a
//! card is annotated with are held, in document order, in a [`list::TagList`].

pub mod collection;
pub mod list;
pub mod string;
