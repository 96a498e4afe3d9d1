//! Tabula Core - Record tables
//!
//! Search, status filtering, page slicing and pagination windows for the
//! record tables of a business-administration dashboard. Every function here
//! is pure; the only mutable piece is [`TableState`], which the caller owns.
//!
//! ```
//! use serde_json::json;
//! use tabula_core::{build_window, filter, into_record, slice_page, total_pages, PageToken};
//!
//! let records = vec![
//!     into_record(json!({"name": "Acme", "status": "Active"})).unwrap(),
//!     into_record(json!({"name": "Beta", "status": "Closed"})).unwrap(),
//! ];
//! let found = filter(&records, "acme", &["name"], None, None);
//! assert_eq!(found.len(), 1);
//!
//! let pages = total_pages(found.len(), 10);
//! assert_eq!(slice_page(&found, 1, 10).len(), 1);
//! assert_eq!(build_window(1, pages, 1), vec![PageToken::Page(1)]);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod slicer;
pub mod table;
pub mod window;

pub use config::{FilterChangePolicy, TableConfig, TableDefaults, DEFAULT_PAGE_SIZE};
pub use error::{ConfigError, PageError, TabulaError, TabulaResult};
pub use filter::{filter, filter_records, filter_refs, FilterQuery, StatusFilter, STATUS_ALL};
pub use record::{into_record, lookup_path, stringify, Record, Searchable};
pub use slicer::{slice_page, total_pages, PageSummary};
pub use table::{clamp_page, EmptyState, TableSnapshot, TableState, TableView};
pub use window::{
    build_window, canonical_threshold, PageToken, WindowPolicy, DEFAULT_SIBLING_COUNT,
    MAX_SIBLING_COUNT,
};
