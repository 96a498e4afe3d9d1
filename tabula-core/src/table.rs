//! Table state: the caller-owned page cursor and filters
//!
//! The filter engine, slicer and window builder are pure. `TableState` is the
//! single mutable cell a table UI keeps between renders. Records are passed
//! in fresh on every [`TableState::view`] call and never stored.

use crate::config::{FilterChangePolicy, TableConfig};
use crate::error::{PageError, TabulaResult};
use crate::filter::{filter_refs, FilterQuery, StatusFilter};
use crate::record::Searchable;
use crate::slicer::{slice_page, total_pages, PageSummary};
use crate::window::PageToken;
use serde::{Deserialize, Serialize};

/// Why a rendered page has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// The data source supplied no records at all
    NoData,
    /// Records exist but the search or status filter removed all of them
    NoMatches,
}

/// Everything a table needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a, R> {
    /// Records on the current page, in filtered order
    pub rows: Vec<&'a R>,
    pub summary: PageSummary,
    pub window: Vec<PageToken>,
    pub empty_state: Option<EmptyState>,
    /// Page the cursor was on before clamping, if clamping happened
    pub clamped_from: Option<usize>,
}

/// Serializable cursor + filter state, for restoring a table between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub search_term: String,
    pub status: StatusFilter,
    pub current_page: usize,
    pub page_size: usize,
}

/// Clamp a page cursor into `1..=total_pages`.
pub fn clamp_page(current_page: usize, total_pages: usize) -> usize {
    current_page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    config: TableConfig,
    search_term: String,
    status: StatusFilter,
    current_page: usize,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl TableState {
    pub fn new(config: TableConfig) -> TabulaResult<Self> {
        config.validate()?;
        let page_size = config.page_size;
        Ok(Self {
            config,
            search_term: String::new(),
            status: StatusFilter::All,
            current_page: 1,
            page_size,
            total_items: 0,
            total_pages: 1,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status(&self) -> &StatusFilter {
        &self.status
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page count as of the last [`TableState::view`].
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Filtered record count as of the last [`TableState::view`].
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.filters_changed();
        }
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        if status != self.status {
            self.status = status;
            self.filters_changed();
        }
    }

    /// Clear search and status, back to page 1.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.status = StatusFilter::All;
        self.current_page = 1;
    }

    fn filters_changed(&mut self) {
        if self.config.on_filter_change == FilterChangePolicy::ResetToFirst {
            self.current_page = 1;
        }
    }

    /// The compiled query for the current search and status.
    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(&self.config.search_keys)
            .with_search(&self.search_term)
            .with_status(self.status.clone(), self.config.status_key.as_deref())
    }

    /// Filter, clamp, slice and window `records` for the current state.
    pub fn view<'a, R: Searchable>(&mut self, records: &'a [R]) -> TableView<'a, R> {
        let filtered = filter_refs(records, &self.query());
        let pages = total_pages(filtered.len(), self.page_size);

        let clamped = clamp_page(self.current_page, pages);
        let clamped_from = (clamped != self.current_page).then_some(self.current_page);
        if let Some(previous) = clamped_from {
            tracing::debug!(
                previous_page = previous,
                current_page = clamped,
                total_pages = pages,
                "Clamped page cursor after data or filter change"
            );
        }
        self.current_page = clamped;
        self.total_items = filtered.len();
        self.total_pages = pages;

        let rows = slice_page(&filtered, clamped, self.page_size).to_vec();
        let empty_state = if records.is_empty() {
            Some(EmptyState::NoData)
        } else if filtered.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        };

        TableView {
            rows,
            summary: PageSummary::new(clamped, self.page_size, filtered.len()),
            window: self.config.window.build(clamped, pages),
            empty_state,
            clamped_from,
        }
    }

    // ------------------------------------------------------------------------
    // Navigation callbacks
    // ------------------------------------------------------------------------

    /// Jump to `page`. Pages outside `1..=total_pages` are rejected and the
    /// cursor stays where it is.
    pub fn go_to(&mut self, page: usize) -> Result<(), PageError> {
        if page == 0 || page > self.total_pages {
            tracing::debug!(
                page,
                total_pages = self.total_pages,
                "Rejected navigation to out-of-range page"
            );
            return Err(PageError::OutOfRange {
                page,
                total_pages: self.total_pages,
            });
        }
        self.current_page = page;
        Ok(())
    }

    /// Advance one page. Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages;
    }

    /// Change the page size, keeping the first visible record on screen.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let first_index = (self.current_page - 1) * self.page_size;
        self.page_size = page_size;
        self.total_pages = total_pages(self.total_items, page_size);
        self.current_page = clamp_page(first_index / page_size + 1, self.total_pages);
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            search_term: self.search_term.clone(),
            status: self.status.clone(),
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// Restore a snapshot. The page is clamped on the next [`TableState::view`].
    pub fn restore(&mut self, snapshot: TableSnapshot) {
        self.search_term = snapshot.search_term;
        self.status = snapshot.status;
        self.page_size = snapshot.page_size.max(1);
        self.current_page = snapshot.current_page.max(1);
    }
}

// =============================================================================
// TESTS
// =============================================================================
