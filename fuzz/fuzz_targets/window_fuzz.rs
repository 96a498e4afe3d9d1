//! Fuzz test for page slicing and pagination windows
//!
//! Arbitrary page positions, page sizes and sibling counts should never
//! panic, and the window must stay pinned to the first and last pages.
//!
//! Run with: cargo +nightly fuzz run window_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabula_core::{slice_page, total_pages, PageSummary, PageToken, WindowPolicy};

fuzz_target!(|data: (u16, u16, u16, u8, u8)| {
    let (len, current, size, siblings, threshold) = data;
    let items: Vec<u16> = (0..len).collect();
    let (current, size) = (usize::from(current), usize::from(size));

    let page = slice_page(&items, current, size);
    assert!(page.len() <= size.max(1));

    let pages = total_pages(items.len(), size);
    let summary = PageSummary::new(current, size, items.len());
    assert_eq!(summary.total_pages, pages);
    assert_eq!(summary.visible_count(), page.len());

    let policy = WindowPolicy::with_siblings(usize::from(siblings % 8))
        .collapse_above(usize::from(threshold));
    let window = policy.build(current, pages);
    assert_eq!(window.first(), Some(&PageToken::Page(1)));
    if pages > 1 {
        assert_eq!(window.last(), Some(&PageToken::Page(pages)));
    }
    assert!(window
        .windows(2)
        .all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis())));
});
