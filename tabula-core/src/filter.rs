//! Filter engine for record tables
//!
//! Narrows a record list by a free-text search across configured fields and
//! by an optional status equality. Both comparisons are case-insensitive.
//! Filtering is stable: surviving records keep their input order.

use crate::record::Searchable;
use serde::{Deserialize, Serialize};

/// Sentinel status value meaning "no status filter".
pub const STATUS_ALL: &str = "all";

/// Status predicate applied alongside the text search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    /// Every status passes
    #[default]
    All,
    /// Only records whose status equals this value (case-insensitive)
    Only(String),
}

impl StatusFilter {
    /// Parse a dropdown value. `"all"` in any case, or an empty string,
    /// disables the filter.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(STATUS_ALL) {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }

    /// Display label for the value, `"all"` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => STATUS_ALL,
            StatusFilter::Only(value) => value.as_str(),
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled search + status query.
///
/// The search term and status value are lower-cased once at construction so
/// matching a record only lower-cases the record side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    search_term: String,
    search_keys: Vec<String>,
    status: StatusFilter,
    status_key: Option<String>,
}

impl FilterQuery {
    /// Create a query searching the given fields with an empty term.
    pub fn new<S: AsRef<str>>(search_keys: &[S]) -> Self {
        Self {
            search_term: String::new(),
            search_keys: search_keys.iter().map(|k| k.as_ref().to_string()).collect(),
            status: StatusFilter::All,
            status_key: None,
        }
    }

    /// Set the free-text search term.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term = term.to_lowercase();
        self
    }

    /// Set the status predicate and the field it reads.
    pub fn with_status(mut self, status: StatusFilter, status_key: Option<&str>) -> Self {
        self.status = match status {
            StatusFilter::All => StatusFilter::All,
            StatusFilter::Only(value) => StatusFilter::Only(value.to_lowercase()),
        };
        self.status_key = status_key.map(str::to_string);
        self
    }

    /// The lower-cased search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_keys(&self) -> &[String] {
        &self.search_keys
    }

    pub fn status(&self) -> &StatusFilter {
        &self.status
    }

    pub fn status_key(&self) -> Option<&str> {
        self.status_key.as_deref()
    }

    /// True when neither predicate can exclude a record.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.status.is_all()
    }

    /// Whether a record survives both predicates.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        self.matches_status(record) && self.matches_search(record)
    }

    fn matches_status<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        let wanted = match &self.status {
            StatusFilter::All => return true,
            StatusFilter::Only(value) => value,
        };
        // Without a status key every record reads as an empty status.
        let actual = self
            .status_key
            .as_deref()
            .and_then(|key| record.field_text(key))
            .unwrap_or_default();
        actual.to_lowercase() == *wanted
    }

    fn matches_search<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        self.search_keys.iter().any(|key| {
            record
                .field_text(key)
                .is_some_and(|text| text.to_lowercase().contains(&self.search_term))
        })
    }
}

/// Borrowing filter: references to the surviving records, in input order.
pub fn filter_refs<'a, R: Searchable>(records: &'a [R], query: &FilterQuery) -> Vec<&'a R> {
    records.iter().filter(|record| query.matches(*record)).collect()
}

/// Cloning filter: owned copies of the surviving records, in input order.
pub fn filter_records<R: Searchable + Clone>(records: &[R], query: &FilterQuery) -> Vec<R> {
    records
        .iter()
        .filter(|record| query.matches(*record))
        .cloned()
        .collect()
}

/// Filter records by search term across `filter_keys`, and by status.
///
/// `status_filter` of `None`, `"all"` or `""` disables the status predicate.
pub fn filter<R, S>(
    records: &[R],
    search_term: &str,
    filter_keys: &[S],
    status_filter: Option<&str>,
    status_key: Option<&str>,
) -> Vec<R>
where
    R: Searchable + Clone,
    S: AsRef<str>,
{
    let status = status_filter.map(StatusFilter::parse).unwrap_or_default();
    let query = FilterQuery::new(filter_keys)
        .with_search(search_term)
        .with_status(status, status_key);
    filter_records(records, &query)
}

// =============================================================================
// TESTS
// =============================================================================
