//! Fuzz test for the record filter
//!
//! Feeds arbitrary JSON documents and search terms through the filter to find:
//! - Panics on unusual field values (deep nesting, odd numbers, unicode)
//! - Results that are not an ordered subset of the input
//!
//! Run with: cargo +nightly fuzz run filter_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabula_core::{filter_refs, into_record, FilterQuery, Record, StatusFilter};

fuzz_target!(|data: &[u8]| {
    // First line is the search term, the rest a JSON array of records
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (term, json) = input.split_once('\n').unwrap_or((input, "[]"));
    let Ok(serde_json::Value::Array(entries)) = serde_json::from_str(json) else {
        return;
    };
    let records: Vec<Record> = entries.into_iter().filter_map(into_record).collect();

    let query = FilterQuery::new(&["name", "email", "vendor.name", "tags"])
        .with_search(term)
        .with_status(StatusFilter::parse(term), Some("status"));
    let found = filter_refs(&records, &query);
    assert!(found.len() <= records.len());

    // Survivors appear in input order
    let mut cursor = 0;
    for record in &found {
        let position = records[cursor..]
            .iter()
            .position(|candidate| std::ptr::eq(candidate, *record))
            .expect("filtered record must come from the input");
        cursor += position + 1;
    }

    // Empty search with no status keeps everything
    let everything = FilterQuery::new(&["name"]);
    assert_eq!(filter_refs(&records, &everything).len(), records.len());
});
