//! Tabula Test Utilities
//!
//! Centralized test infrastructure for the Tabula workspace:
//! - Proptest generators for records, search terms and page positions
//! - Fixtures mirroring the dashboard's tables (bids, vendors, roles, employees)
//! - Custom assertions for table-specific validation

// Re-export core types for convenience
pub use tabula_core::{
    build_window, filter, filter_refs, into_record, slice_page, total_pages, EmptyState,
    FilterChangePolicy, FilterQuery, PageSummary, PageToken, Record, StatusFilter, TableConfig,
    TableState, TabulaError, TabulaResult, WindowPolicy,
};

use serde_json::{json, Value};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating table inputs.

    use super::*;
    use proptest::prelude::*;

    /// Status values as they show up in the dashboard, mixed case included.
    pub const STATUSES: [&str; 5] = ["Active", "Closed", "Pending", "CLOSED", "draft"];

    /// Generate a status value.
    pub fn arb_status() -> impl Strategy<Value = String> {
        prop::sample::select(STATUSES.to_vec()).prop_map(str::to_string)
    }

    /// Generate a scalar JSON field value.
    pub fn arb_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            "[a-zA-Z0-9 @.-]{0,16}".prop_map(Value::String),
            any::<i32>().prop_map(|n| json!(n)),
            any::<bool>().prop_map(Value::Bool),
            Just(Value::Null),
        ]
    }

    /// Generate a record with `name`, `code` and `status`, where `name` and
    /// `code` may be missing, plus an optional nested `vendor.name`.
    pub fn arb_record() -> impl Strategy<Value = Record> {
        (
            proptest::option::of("[a-zA-Z ]{0,12}"),
            proptest::option::of(arb_scalar()),
            arb_status(),
            proptest::option::of("[a-zA-Z]{1,8}"),
        )
            .prop_map(|(name, code, status, vendor)| {
                let mut record = Record::new();
                if let Some(name) = name {
                    record.insert("name".to_string(), Value::String(name));
                }
                if let Some(code) = code {
                    record.insert("code".to_string(), code);
                }
                record.insert("status".to_string(), Value::String(status));
                if let Some(vendor) = vendor {
                    record.insert("vendor".to_string(), json!({ "name": vendor }));
                }
                record
            })
    }

    /// Generate a list of records.
    pub fn arb_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
        prop::collection::vec(arb_record(), 0..max)
    }

    /// Generate a short search term, possibly empty.
    pub fn arb_search_term() -> impl Strategy<Value = String> {
        "[a-zA-Z]{0,3}"
    }

    /// Generate a status filter, biased towards "all".
    pub fn arb_status_filter() -> impl Strategy<Value = StatusFilter> {
        prop_oneof![
            2 => Just(StatusFilter::All),
            3 => arb_status().prop_map(StatusFilter::Only),
        ]
    }

    /// Generate `(current_page, total_pages)` with the page in range.
    pub fn arb_page_position() -> impl Strategy<Value = (usize, usize)> {
        (1usize..500).prop_flat_map(|total| (1..=total, Just(total)))
    }

    /// Generate a valid table configuration over the generated record shape.
    pub fn arb_table_config() -> impl Strategy<Value = TableConfig> {
        (1usize..30, 0usize..4, any::<bool>()).prop_map(|(page_size, siblings, reset)| {
            TableConfig {
                search_keys: vec![
                    "name".to_string(),
                    "code".to_string(),
                    "vendor.name".to_string(),
                ],
                status_key: Some("status".to_string()),
                page_size,
                window: WindowPolicy::with_siblings(siblings),
                on_filter_change: if reset {
                    FilterChangePolicy::ResetToFirst
                } else {
                    FilterChangePolicy::Clamp
                },
            }
        })
    }
}

// ============================================================================
// TEST FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built test data for the dashboard tables.

    use super::*;

    fn record(value: Value) -> Record {
        into_record(value).unwrap_or_default()
    }

    /// Procurement bids: 23 rows, statuses cycling Open/Closed/Awarded.
    pub fn bids() -> Vec<Record> {
        let statuses = ["Open", "Closed", "Awarded"];
        (1..=23)
            .map(|i| {
                record(json!({
                    "id": format!("BID-{:04}", i),
                    "title": format!("Supply tender {}", i),
                    "status": statuses[(i - 1) % statuses.len()],
                    "amount": i * 1250,
                    "vendor": { "name": if i % 4 == 0 { "Acme Supplies" } else { "Beta Traders" } }
                }))
            })
            .collect()
    }

    /// Vendor directory with a few missing fields.
    pub fn vendors() -> Vec<Record> {
        vec![
            record(json!({"name": "Acme Supplies", "email": "sales@acme.test", "status": "Active", "category": "Office"})),
            record(json!({"name": "Beta Traders", "email": "hello@beta.test", "status": "Inactive"})),
            record(json!({"name": "Gamma Logistics", "status": "Active", "category": "Freight"})),
            record(json!({"name": "Delta Foods", "email": null, "status": "active", "category": "Catering"})),
            record(json!({"email": "anon@unknown.test", "status": "Pending"})),
        ]
    }

    /// Role definitions as listed in HR settings.
    pub fn roles() -> Vec<Record> {
        vec![
            record(json!({"role": "Administrator", "department": "IT", "members": 3})),
            record(json!({"role": "Accountant", "department": "Finance", "members": 5})),
            record(json!({"role": "HR Officer", "department": "Human Resources", "members": 2})),
            record(json!({"role": "Store Keeper", "department": "Inventory", "members": 4})),
        ]
    }

    /// Employee payroll rows, `count` of them.
    pub fn employees(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| {
                record(json!({
                    "employee_id": format!("EMP{:03}", i),
                    "name": format!("Employee {}", i),
                    "department": if i % 3 == 0 { "Finance" } else { "Operations" },
                    "status": if i % 5 == 0 { "Suspended" } else { "Active" },
                    "salary": 50_000 + i * 100
                }))
            })
            .collect()
    }

    /// Table config for the bids fixture.
    pub fn bids_config() -> TableConfig {
        TableConfig {
            search_keys: vec!["id".to_string(), "title".to_string(), "vendor.name".to_string()],
            status_key: Some("status".to_string()),
            page_size: 10,
            window: WindowPolicy::default(),
            on_filter_change: FilterChangePolicy::Clamp,
        }
    }

    /// Table config for the vendors fixture.
    pub fn vendors_config() -> TableConfig {
        TableConfig {
            search_keys: vec!["name".to_string(), "email".to_string(), "category".to_string()],
            status_key: Some("status".to_string()),
            page_size: 2,
            window: WindowPolicy::default(),
            on_filter_change: FilterChangePolicy::Clamp,
        }
    }
}

// ============================================================================
// CUSTOM ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Custom assertion functions for table-specific validation.

    use super::*;

    /// Assert that a TabulaResult is Ok.
    #[track_caller]
    pub fn assert_ok<T: std::fmt::Debug>(result: &TabulaResult<T>) {
        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
    }

    /// Assert that a TabulaResult is a Config error.
    #[track_caller]
    pub fn assert_config_error<T: std::fmt::Debug>(result: &TabulaResult<T>) {
        match result {
            Err(TabulaError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other),
        }
    }

    /// Assert that a window starts at page 1 and ends at `total_pages`.
    #[track_caller]
    pub fn assert_window_pinned(window: &[PageToken], total_pages: usize) {
        assert_eq!(
            window.first(),
            Some(&PageToken::Page(1)),
            "Window must start at page 1: {:?}",
            window
        );
        if total_pages > 1 {
            assert_eq!(
                window.last(),
                Some(&PageToken::Page(total_pages)),
                "Window must end at page {}: {:?}",
                total_pages,
                window
            );
        }
    }

    /// Assert that a record has `field` equal to the string `expected`.
    #[track_caller]
    pub fn assert_field(record: &Record, field: &str, expected: &str) {
        let actual = record.get(field).and_then(Value::as_str);
        assert_eq!(actual, Some(expected), "Field {} mismatch in {:?}", field, record);
    }

    /// Assert that a page summary covers `start..=end` of `total` items.
    #[track_caller]
    pub fn assert_summary_range(summary: &PageSummary, start: usize, end: usize, total: usize) {
        assert_eq!(
            (summary.range_start, summary.range_end, summary.total_items),
            (start, end, total),
            "Unexpected page summary: {:?}",
            summary
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
