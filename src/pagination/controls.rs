//! Pagination Controls

use crate::pagination::{PAGE_SIZE, PageState, total_pages};

/// Prev/next controls over a [`PageState`], bounded by the matched-item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    page_size: usize,
}

/// Render model for the controls. Only produced when there is more than one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsModel {
    /// Current one-based page.
    pub current_page: usize,

    /// Total page count for the matched items.
    pub total_pages: usize,

    /// The previous button is disabled on the first page.
    pub prev_disabled: bool,

    /// The next button is disabled on the last page.
    pub next_disabled: bool,
}

impl ControlsModel {
    /// The page indicator text, e.g. `Page 2 / 3`.
    pub fn label(&self) -> String {
        format!("Page {} / {}", self.current_page, self.total_pages)
    }
}

impl PaginationControls {
    /// Controls for views showing `page_size` items per page.
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for `matched` items.
    pub fn total_pages(&self, matched: usize) -> usize {
        total_pages(matched, self.page_size)
    }

    /// Move back one page. Returns false on the first page.
    pub fn prev(&self, page: &mut PageState) -> bool {
        if page.current_page() > 1 {
            page.set_page(page.current_page().saturating_sub(1));

            true
        } else {
            false
        }
    }

    /// Move forward one page. Returns false on or past the last page.
    pub fn next(&self, page: &mut PageState, matched: usize) -> bool {
        if page.current_page() < self.total_pages(matched) {
            page.set_page(page.current_page().saturating_add(1));

            true
        } else {
            false
        }
    }

    /// Build the render model, or `None` when there is at most one page.
    pub fn render(&self, page: &PageState, matched: usize) -> Option<ControlsModel> {
        let total_pages = self.total_pages(matched);

        if total_pages <= 1 {
            return None;
        }

        Some(ControlsModel {
            current_page: page.current_page(),
            total_pages,
            prev_disabled: page.current_page() <= 1,
            next_disabled: page.current_page() >= total_pages,
        })
    }
}

impl Default for PaginationControls {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
