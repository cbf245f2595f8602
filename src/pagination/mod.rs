//! Pagination
//!
//! Page state and the window of matched ranks a page covers.

use serde::Deserialize;

pub mod controls;

/// Number of matched items shown per page.
pub const PAGE_SIZE: usize = 9;

/// The current page of one paginated view.
///
/// `current_page` is one-based. The state holder does not validate; callers
/// such as [`controls::PaginationControls`] clamp before calling [`PageState::set_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
}

impl PageState {
    /// Create a page state positioned on `current_page`.
    pub fn new(current_page: usize) -> Self {
        Self { current_page }
    }

    /// The current one-based page number.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Set the current page verbatim.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// The window of ranks covered by the current page.
    pub fn window(&self, page_size: usize) -> PageWindow {
        PageWindow::new(self.current_page, page_size)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Half-open range of zero-based ranks, `[start, end)`, shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// First rank on the page.
    pub start: usize,

    /// One past the last rank on the page.
    pub end: usize,
}

impl PageWindow {
    /// Window for the one-based `page` with `page_size` items per page.
    pub fn new(page: usize, page_size: usize) -> Self {
        let start = page.saturating_sub(1).saturating_mul(page_size);

        Self {
            start,
            end: start.saturating_add(page_size),
        }
    }

    /// Returns true if `rank` falls on this page.
    pub fn contains(&self, rank: usize) -> bool {
        self.start <= rank && rank < self.end
    }
}

/// Number of pages needed for `matched` items, rounding up.
///
/// No matched items means no pages. A zero page size also yields zero pages.
pub fn total_pages(matched: usize, page_size: usize) -> usize {
    matched.checked_div(page_size).map_or(0, |full| {
        if matched % page_size == 0 {
            full
        } else {
            full.saturating_add(1)
        }
    })
}

/// What happens to the current page when the matched set shrinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Pull the current page back to the last page that has items.
    #[default]
    Clamp,

    /// Leave the current page where it is, even if it is now empty.
    Preserve,
}

impl PagePolicy {
    /// Apply the policy to `page` given the current page count.
    pub fn apply(self, page: &mut PageState, total_pages: usize) {
        if self == Self::Preserve {
            return;
        }

        let last = total_pages.max(1);

        if page.current_page() > last {
            page.set_page(last);
        } else if page.current_page() == 0 {
            page.set_page(1);
        }
    }
}
