//! Pagination window builder
//!
//! Computes the sequence of page buttons and ellipses a pagination control
//! renders. The window is a rendering hint only: it never changes which
//! records are visible, and clicking a page token is the caller's business.

use serde::{Deserialize, Serialize};

/// Default number of page buttons on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Largest sibling count a table configuration accepts.
pub const MAX_SIBLING_COUNT: usize = 100;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PageToken {
    /// A clickable page number (1-based)
    Page(usize),
    /// A gap of one or more hidden pages
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

/// Sibling count and collapse threshold for a pagination control.
///
/// Page lists at or below `collapse_threshold` are rendered in full. The
/// canonical pairing is `collapse_threshold = 2 * sibling_count + 5`, the
/// longest a collapsed window can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WindowPolicy {
    pub sibling_count: usize,
    pub collapse_threshold: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self::with_siblings(DEFAULT_SIBLING_COUNT)
    }
}

impl WindowPolicy {
    /// Canonical policy for a sibling count.
    pub fn with_siblings(sibling_count: usize) -> Self {
        Self {
            sibling_count,
            collapse_threshold: canonical_threshold(sibling_count),
        }
    }

    /// Override the collapse threshold for call sites that window earlier
    /// or later than the canonical pairing.
    pub fn collapse_above(mut self, threshold: usize) -> Self {
        self.collapse_threshold = threshold;
        self
    }

    /// Build the token sequence for `current_page` of `total_pages`.
    ///
    /// A `total_pages` of 0 is treated as a single page and `current_page` is
    /// clamped into `1..=total_pages`.
    pub fn build(&self, current_page: usize, total_pages: usize) -> Vec<PageToken> {
        let total = total_pages.max(1);
        let current = current_page.clamp(1, total);
        if current != current_page {
            tracing::debug!(
                requested = current_page,
                clamped = current,
                total_pages = total,
                "Pagination window clamped current page"
            );
        }

        if total <= self.collapse_threshold.max(1) {
            return (1..=total).map(PageToken::Page).collect();
        }

        let siblings = self.sibling_count;
        let span = siblings.saturating_mul(2);
        let last = total - 1;
        let (start, end) = if current <= siblings.saturating_add(1) {
            // Near the first page: hold the window open to the right.
            (2, span.saturating_add(1).min(last))
        } else if current.saturating_add(siblings) >= total {
            // Near the last page: mirror of the above.
            (total.saturating_sub(span).max(2), last)
        } else {
            ((current - siblings).max(2), current.saturating_add(siblings).min(last))
        };

        let mut tokens = Vec::with_capacity(end.saturating_sub(start).saturating_add(5));
        tokens.push(PageToken::Page(1));
        if start > 2 {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.extend((start..=end).map(PageToken::Page));
        if end < last {
            tokens.push(PageToken::Ellipsis);
        }
        tokens.push(PageToken::Page(total));
        tokens
    }
}

/// Collapse threshold that pairs with `sibling_count`.
///
/// Saturates at `usize::MAX`, which renders every page.
pub fn canonical_threshold(sibling_count: usize) -> usize {
    sibling_count.saturating_mul(2).saturating_add(5)
}

/// Build a pagination window with the canonical threshold for `sibling_count`.
pub fn build_window(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageToken> {
    WindowPolicy::with_siblings(sibling_count).build(current_page, total_pages)
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_position() -> impl Strategy<Value = (usize, usize)> {
        (1usize..200).prop_flat_map(|total| (1..=total, Just(total)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// First token is page 1; last is the final page when there is more than one
        #[test]
        fn prop_window_pins_edges((current, total) in arb_position(), siblings in 0usize..4) {
            let tokens = build_window(current, total, siblings);
            prop_assert_eq!(tokens.first().copied(), Some(PageToken::Page(1)));
            if total > 1 {
                prop_assert_eq!(tokens.last().copied(), Some(PageToken::Page(total)));
            }
        }

        /// Pages are strictly increasing, within range, and include the current page
        #[test]
        fn prop_window_pages_sorted_unique((current, total) in arb_position(), siblings in 0usize..4) {
            let tokens = build_window(current, total, siblings);
            let pages: Vec<usize> = tokens.iter().filter_map(PageToken::page).collect();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(pages.iter().all(|p| (1..=total).contains(p)));
            prop_assert!(pages.contains(&current));
        }

        /// Ellipses only stand for real gaps and never appear twice in a row
        #[test]
        fn prop_ellipsis_marks_gap((current, total) in arb_position(), siblings in 0usize..4) {
            let tokens = build_window(current, total, siblings);
            for (index, token) in tokens.iter().enumerate() {
                if token.is_ellipsis() {
                    let before = tokens[index - 1].page();
                    let after = tokens[index + 1].page();
                    prop_assert!(before.is_some() && after.is_some());
                    prop_assert!(after.unwrap_or(0) > before.unwrap_or(0) + 1);
                } else if let (Some(page), Some(next)) = (
                    token.page(),
                    tokens.get(index + 1).and_then(PageToken::page),
                ) {
                    prop_assert_eq!(next, page + 1);
                }
            }
        }

        /// Collapsed windows never exceed the canonical threshold in length
        #[test]
        fn prop_window_length_bounded((current, total) in arb_position(), siblings in 0usize..4) {
            let tokens = build_window(current, total, siblings);
            prop_assert!(tokens.len() <= canonical_threshold(siblings));
        }

        /// Siblings of the current page are shown when they exist
        #[test]
        fn prop_window_shows_siblings((current, total) in arb_position(), siblings in 0usize..4) {
            let tokens = build_window(current, total, siblings);
            let pages: Vec<usize> = tokens.iter().filter_map(PageToken::page).collect();
            let low = current.saturating_sub(siblings).max(1);
            let high = (current + siblings).min(total);
            for page in low..=high {
                prop_assert!(pages.contains(&page), "page {} missing from {:?}", page, pages);
            }
        }
    }
}
