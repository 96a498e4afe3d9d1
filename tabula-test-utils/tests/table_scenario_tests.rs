//! Integration tests for dashboard table flows
//!
//! Tests verify:
//! - Search across several keys, nested paths included
//! - Status dropdown filtering with the "all" sentinel
//! - Page slicing and the "Showing X to Y of Z" summary
//! - Pagination windows for small and large page counts
//! - Cursor clamping after filter changes

use tabula_test_utils::assertions::{
    assert_config_error, assert_ok, assert_summary_range, assert_window_pinned,
};
use proptest::prelude::*;
use tabula_test_utils::fixtures;
use tabula_test_utils::generators::{
    arb_page_position, arb_records, arb_search_term, arb_status_filter, arb_table_config,
};
use tabula_test_utils::*;

// ============================================================================
// SEARCH AND STATUS
// ============================================================================

#[test]
fn vendor_search_matches_email_case_insensitively() {
    let vendors = fixtures::vendors();
    let found = filter(&vendors, "ACME.TEST", &["name", "email"], None, None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get("name").and_then(|v| v.as_str()), Some("Acme Supplies"));
}

#[test]
fn vendor_search_skips_missing_and_null_fields() {
    let vendors = fixtures::vendors();
    let found = filter(&vendors, "foods", &["email", "name"], None, None);
    assert_eq!(found.len(), 1);

    let none = filter(&vendors, "null", &["email"], None, None);
    assert!(none.is_empty());
}

#[test]
fn vendor_status_filter_is_case_insensitive() {
    let vendors = fixtures::vendors();
    let active = filter(&vendors, "", &["name"], Some("ACTIVE"), Some("status"));
    assert_eq!(active.len(), 3);

    let all = filter(&vendors, "", &["name"], Some("All"), Some("status"));
    assert_eq!(all.len(), vendors.len());
}

#[test]
fn bid_search_reaches_nested_vendor_name() {
    let bids = fixtures::bids();
    let query = FilterQuery::new(&fixtures::bids_config().search_keys).with_search("acme");
    let found = filter_refs(&bids, &query);
    assert_eq!(found.len(), 5);
    assert!(found
        .iter()
        .all(|bid| bid.get("vendor").and_then(|v| v.get("name")).and_then(|n| n.as_str())
            == Some("Acme Supplies")));
}

#[test]
fn combined_search_and_status_preserve_source_order() {
    let bids = fixtures::bids();
    let found = filter(&bids, "tender 1", &["title"], Some("open"), Some("status"));
    let ids: Vec<&str> = found
        .iter()
        .filter_map(|bid| bid.get("id").and_then(|v| v.as_str()))
        .collect();
    assert_eq!(ids, vec!["BID-0001", "BID-0010", "BID-0013", "BID-0016", "BID-0019"]);
}

#[test]
fn roles_without_status_key_ignore_status_all() {
    let roles = fixtures::roles();
    let found = filter(&roles, "finance", &["role", "department"], Some("all"), None);
    assert_eq!(found.len(), 1);
}

// ============================================================================
// PAGING
// ============================================================================

#[test]
fn employees_third_page_of_ten() {
    let employees = fixtures::employees(23);
    let page = slice_page(&employees, 3, 10);
    assert_eq!(page.len(), 3);
    assert_eq!(total_pages(employees.len(), 10), 3);

    let summary = PageSummary::new(3, 10, employees.len());
    assert_summary_range(&summary, 21, 23, 23);
    assert_eq!(summary.to_string(), "Showing 21 to 23 of 23 entries");
}

#[test]
fn large_table_window_collapses_both_sides() {
    let window = build_window(50, 100, 1);
    assert_window_pinned(&window, 100);
    assert_eq!(
        window,
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(49),
            PageToken::Page(50),
            PageToken::Page(51),
            PageToken::Ellipsis,
            PageToken::Page(100),
        ]
    );
}

#[test]
fn small_table_window_lists_every_page() {
    for total in 1..=7 {
        let window = build_window(1, total, 1);
        assert_eq!(window.len(), total);
        assert!(window.iter().all(|token| !token.is_ellipsis()));
    }
}

// ============================================================================
// TABLE STATE
// ============================================================================

#[test]
fn bids_table_clamps_after_status_change() {
    let bids = fixtures::bids();
    let mut table = TableState::new(fixtures::bids_config()).unwrap();
    table.view(&bids);
    table.go_to(3).unwrap();

    table.set_status(StatusFilter::parse("Awarded"));
    let view = table.view(&bids);
    assert_eq!(view.clamped_from, Some(3));
    assert_eq!(table.current_page(), 1);
    assert_eq!(view.rows.len(), 7);
    assert_window_pinned(&view.window, 1);
}

#[test]
fn vendors_table_walks_every_page() {
    let vendors = fixtures::vendors();
    let mut table = TableState::new(fixtures::vendors_config()).unwrap();
    let mut seen = 0;
    loop {
        let view = table.view(&vendors);
        seen += view.rows.len();
        if !table.next_page() {
            break;
        }
    }
    assert_eq!(seen, vendors.len());
    assert_eq!(table.current_page(), 3);
}

#[test]
fn vendors_table_reports_no_matches() {
    let vendors = fixtures::vendors();
    let mut table = TableState::new(fixtures::vendors_config()).unwrap();
    table.set_search("nothing like this");
    let view = table.view(&vendors);
    assert_eq!(view.empty_state, Some(EmptyState::NoMatches));
    assert_summary_range(&view.summary, 0, 0, 0);
}

#[test]
fn table_rejects_invalid_configs() {
    let mut config = fixtures::vendors_config();
    config.page_size = 0;
    assert_config_error(&TableState::new(config).map(|_| ()));
    assert_ok(&TableState::new(fixtures::vendors_config()).map(|_| ()));
}

#[test]
fn snapshot_survives_json_round_trip() {
    let bids = fixtures::bids();
    let mut table = TableState::new(fixtures::bids_config()).unwrap();
    table.set_search("tender");
    table.set_status(StatusFilter::parse("closed"));
    table.view(&bids);

    let json = serde_json::to_string(&table.snapshot()).unwrap();
    let mut restored = TableState::new(fixtures::bids_config()).unwrap();
    restored.restore(serde_json::from_str(&json).unwrap());
    assert_eq!(restored.snapshot(), table.snapshot());
}

// ============================================================================
// ARBITRARY TABLE FLOWS
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any search, status and requested page yields a page consistent with
    /// filtering then slicing, and a window pinned to the page range
    #[test]
    fn table_view_matches_filter_then_slice(
        records in arb_records(60),
        term in arb_search_term(),
        status in arb_status_filter(),
        config in arb_table_config(),
        (requested, _) in arb_page_position(),
    ) {
        let mut table = TableState::new(config).unwrap();
        table.set_search(term);
        table.set_status(status);
        table.view(&records);

        let before = table.current_page();
        match table.go_to(requested) {
            Ok(()) => prop_assert_eq!(table.current_page(), requested),
            Err(_) => {
                prop_assert!(requested > table.total_pages());
                prop_assert_eq!(table.current_page(), before);
            }
        }

        let view = table.view(&records);
        let expected = filter_refs(&records, &table.query());
        let pages = total_pages(expected.len(), table.page_size());
        prop_assert_eq!(view.summary.total_items, expected.len());
        prop_assert_eq!(view.summary.total_pages, pages);
        prop_assert!((1..=pages).contains(&view.summary.current_page));
        prop_assert_eq!(
            view.rows.as_slice(),
            slice_page(&expected, view.summary.current_page, table.page_size())
        );
        assert_window_pinned(&view.window, pages);
        if records.is_empty() {
            prop_assert_eq!(view.empty_state, Some(EmptyState::NoData));
        } else if expected.is_empty() {
            prop_assert_eq!(view.empty_state, Some(EmptyState::NoMatches));
        }
    }
}
