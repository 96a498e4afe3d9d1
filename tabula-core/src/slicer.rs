//! Page slicer
//!
//! Cuts the filtered record list into fixed-size pages and summarizes where
//! the current page sits in it.

use serde::{Deserialize, Serialize};

/// Number of pages needed for `total_items`; never less than 1.
///
/// A `page_size` of 0 is treated as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// The records visible on `current_page` (1-based).
///
/// Out-of-range pages, including page 0, yield an empty slice.
pub fn slice_page<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(page_index) = current_page.checked_sub(1) else {
        return &[];
    };
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Position of the current page within a filtered list.
///
/// `range_start`/`range_end` are the 1-based, inclusive item numbers shown
/// on the page ("Showing 11 to 20 of 23"); both are 0 when the page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageSummary {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub range_start: usize,
    pub range_end: usize,
}

impl PageSummary {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let pages = total_pages(total_items, page_size);
        let in_range = (1..=pages).contains(&current_page);
        let start = current_page.saturating_sub(1).saturating_mul(page_size);
        let (range_start, range_end) = if in_range && start < total_items {
            (start + 1, (start + page_size).min(total_items))
        } else {
            (0, 0)
        };

        Self {
            current_page,
            page_size,
            total_items,
            total_pages: pages,
            has_previous: in_range && current_page > 1,
            has_next: in_range && current_page < pages,
            range_start,
            range_end,
        }
    }

    /// Number of records on this page.
    pub fn visible_count(&self) -> usize {
        if self.range_end == 0 {
            0
        } else {
            self.range_end - self.range_start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible_count() == 0
    }
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.range_start, self.range_end, self.total_items
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
