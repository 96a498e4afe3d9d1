//! Application state and per-table pane state.

use crate::config::{ConfigError, TableSpec, TuiConfig};
use crate::data::DataError;
use crate::keys::{Action, PromptAction};
use crate::nav::TableNav;
use crate::notifications::{Notification, NotificationLevel};
use crate::persistence::PersistedState;
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use tabula_core::{Record, StatusFilter, TableDefaults, TableState};

/// Page sizes offered by `+` and `-`.
pub const PAGE_SIZE_STEPS: [usize; 5] = [5, 10, 20, 50, 100];

const MAX_NOTIFICATIONS: usize = 50;

pub const HELP_TEXT: &str = "\
/  search            s  cycle status      c  clear filters
h/l or arrows  previous/next page        g/G  first/last page
:  go to page        +/-  page size       j/k  move row
Enter  row details   Tab/BackTab  switch table   1-9  jump to table
Ctrl-R  reload data  ?  help              q  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Search,
    GoTo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
    /// Search term to restore if the prompt is cancelled
    pub original: String,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoadStatus {
    pub loaded_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// One configured table: its settings, records and cursor.
#[derive(Debug, Clone)]
pub struct TablePane {
    pub spec: TableSpec,
    pub table: TableState,
    pub records: Vec<Record>,
    /// Row index within the current page
    pub selected_row: Option<usize>,
    pub detail_open: bool,
    pub load: LoadStatus,
}

impl TablePane {
    pub fn new(spec: TableSpec, defaults: &TableDefaults) -> Result<Self, ConfigError> {
        let table =
            TableState::new(spec.table_config(defaults)).map_err(|source| ConfigError::Table {
                table: spec.title.clone(),
                source,
            })?;
        Ok(Self {
            spec,
            table,
            records: Vec::new(),
            selected_row: None,
            detail_open: false,
            load: LoadStatus::default(),
        })
    }

    /// Recompute the page and keep the row selection inside it.
    pub fn sync(&mut self) {
        let rows = self.table.view(&self.records).rows.len();
        self.selected_row = match (rows, self.selected_row) {
            (0, _) => None,
            (rows, Some(row)) => Some(row.min(rows - 1)),
            (_, None) => Some(0),
        };
    }

    pub fn selected_record(&mut self) -> Option<&Record> {
        let row = self.selected_row?;
        self.table.view(&self.records).rows.get(row).copied()
    }

    /// Status values offered by the selector, "all" first.
    pub fn status_choices(&self) -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(self.spec.status_options.iter().map(|o| StatusFilter::parse(o)))
            .collect()
    }

    fn page_changed(&mut self) {
        self.selected_row = Some(0);
        self.sync();
    }
}

/// The status after `current` in the selector order: all, then each option.
pub fn next_status(options: &[String], current: &StatusFilter) -> StatusFilter {
    let next_index = match current {
        StatusFilter::All => 0,
        StatusFilter::Only(value) => options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(value))
            .map_or(options.len(), |i| i + 1),
    };
    options
        .get(next_index)
        .map(|o| StatusFilter::parse(o))
        .unwrap_or_default()
}

/// The next page size step above (`grow`) or below the current size.
pub fn step_page_size(current: usize, grow: bool) -> usize {
    if grow {
        PAGE_SIZE_STEPS
            .iter()
            .copied()
            .find(|size| *size > current)
            .unwrap_or(current)
    } else {
        PAGE_SIZE_STEPS
            .iter()
            .rev()
            .copied()
            .find(|size| *size < current)
            .unwrap_or(current)
    }
}

#[derive(Debug, Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub nav: TableNav,
    pub panes: Vec<TablePane>,
    pub notifications: Vec<Notification>,
    pub prompt: Option<Prompt>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: TuiConfig) -> Result<Self, ConfigError> {
        if config.tables.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tables".to_string(),
                reason: "at least one table is required".to_string(),
            });
        }
        let defaults = TableDefaults::from_env();
        let panes = config
            .tables
            .iter()
            .cloned()
            .map(|spec| TablePane::new(spec, &defaults))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            nav: TableNav::new(panes.len()),
            theme: Theme::synthbrute(),
            config,
            panes,
            notifications: Vec::new(),
            prompt: None,
            modal: None,
        })
    }

    pub fn active(&self) -> &TablePane {
        &self.panes[self.nav.active()]
    }

    pub fn active_mut(&mut self) -> &mut TablePane {
        &mut self.panes[self.nav.active()]
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let excess = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..excess);
        }
    }

    /// The newest notification, if it is still fresh at `now`.
    pub fn current_notification(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.notifications.last().filter(|n| n.is_fresh(now))
    }

    /// Apply a normal-mode action. `Quit` and `Refresh` are handled by the
    /// event loop.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::NextTable => self.nav.next(),
            Action::PrevTable => self.nav.previous(),
            Action::SwitchTable(index) => {
                if !self.nav.jump(index) {
                    self.notify(
                        NotificationLevel::Warning,
                        format!("No table {} configured", index + 1),
                    );
                }
            }
            Action::RowUp => {
                let pane = self.active_mut();
                pane.selected_row = pane.selected_row.map(|row| row.saturating_sub(1));
            }
            Action::RowDown => {
                let pane = self.active_mut();
                pane.selected_row = pane.selected_row.map(|row| row + 1);
            }
            Action::PrevPage => {
                let pane = self.active_mut();
                if pane.table.previous_page() {
                    pane.page_changed();
                }
            }
            Action::NextPage => {
                let pane = self.active_mut();
                if pane.table.next_page() {
                    pane.page_changed();
                }
            }
            Action::FirstPage => {
                let pane = self.active_mut();
                pane.table.first_page();
                pane.page_changed();
            }
            Action::LastPage => {
                let pane = self.active_mut();
                pane.table.last_page();
                pane.page_changed();
            }
            Action::OpenSearch => {
                let term = self.active().table.search_term().to_string();
                self.prompt = Some(Prompt {
                    kind: PromptKind::Search,
                    buffer: term.clone(),
                    original: term,
                });
            }
            Action::OpenGoTo => {
                self.prompt = Some(Prompt {
                    kind: PromptKind::GoTo,
                    buffer: String::new(),
                    original: String::new(),
                });
            }
            Action::CycleStatus => {
                let pane = self.active_mut();
                if pane.spec.status_options.is_empty() {
                    let title = pane.spec.title.clone();
                    self.notify(
                        NotificationLevel::Info,
                        format!("{} has no status filter", title),
                    );
                } else {
                    let next = next_status(&pane.spec.status_options, pane.table.status());
                    pane.table.set_status(next);
                    pane.page_changed();
                }
            }
            Action::ClearFilters => {
                let pane = self.active_mut();
                pane.table.reset_filters();
                pane.page_changed();
            }
            Action::GrowPage | Action::ShrinkPage => {
                let pane = self.active_mut();
                let size = step_page_size(pane.table.page_size(), action == Action::GrowPage);
                pane.table.set_page_size(size);
                pane.page_changed();
            }
            Action::ToggleDetail => {
                let pane = self.active_mut();
                pane.detail_open = !pane.detail_open && pane.selected_row.is_some();
            }
            Action::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: HELP_TEXT.to_string(),
                });
            }
            Action::Cancel => {
                self.modal = None;
                self.active_mut().detail_open = false;
            }
            Action::Quit | Action::Refresh => {}
        }
        self.active_mut().sync();
    }

    /// Apply a key typed while a prompt is open.
    pub fn apply_prompt(&mut self, action: PromptAction) {
        let Some(mut prompt) = self.prompt.take() else {
            return;
        };

        match (prompt.kind, action) {
            (PromptKind::Search, PromptAction::Insert(c)) => {
                prompt.buffer.push(c);
                self.set_active_search(&prompt.buffer);
            }
            (PromptKind::Search, PromptAction::Backspace) => {
                prompt.buffer.pop();
                self.set_active_search(&prompt.buffer);
            }
            (PromptKind::Search, PromptAction::Submit) => return,
            (PromptKind::Search, PromptAction::Cancel) => {
                self.set_active_search(&prompt.original);
                return;
            }
            (PromptKind::GoTo, PromptAction::Insert(c)) => {
                if c.is_ascii_digit() {
                    prompt.buffer.push(c);
                }
            }
            (PromptKind::GoTo, PromptAction::Backspace) => {
                prompt.buffer.pop();
            }
            (PromptKind::GoTo, PromptAction::Submit) => {
                self.go_to_page(&prompt.buffer);
                return;
            }
            (PromptKind::GoTo, PromptAction::Cancel) => return,
        }

        self.prompt = Some(prompt);
    }

    fn set_active_search(&mut self, term: &str) {
        let pane = self.active_mut();
        pane.table.set_search(term);
        pane.page_changed();
    }

    fn go_to_page(&mut self, input: &str) {
        let Ok(page) = input.parse::<usize>() else {
            self.notify(NotificationLevel::Warning, "Enter a page number");
            return;
        };
        let pane = self.active_mut();
        match pane.table.go_to(page) {
            Ok(()) => pane.page_changed(),
            Err(err) => self.notify(NotificationLevel::Warning, err.to_string()),
        }
    }

    /// Install freshly loaded records for table `index`, or record why the
    /// load failed. Failed loads keep the previous records on screen.
    pub fn apply_records(&mut self, index: usize, result: Result<Vec<Record>, DataError>) {
        let Some(pane) = self.panes.get_mut(index) else {
            return;
        };
        let title = pane.spec.title.clone();

        match result {
            Ok(records) => {
                tracing::debug!(table = %title, records = records.len(), "Reloaded table data");
                pane.records = records;
                pane.load.loaded_at = Some(Utc::now());
                pane.sync();
                if pane.load.error.take().is_some() {
                    self.notify(
                        NotificationLevel::Success,
                        format!("{}: data source is readable again", title),
                    );
                }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(table = %title, error = %message, "Failed to load table data");
                if pane.load.error.as_deref() != Some(message.as_str()) {
                    pane.load.error = Some(message.clone());
                    self.notify(NotificationLevel::Error, format!("{}: {}", title, message));
                }
            }
        }
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            active_table: Some(self.active().spec.title.clone()),
            tables: self
                .panes
                .iter()
                .map(|pane| (pane.spec.title.clone(), pane.table.snapshot()))
                .collect(),
        }
    }

    /// Restore saved filters and pages. Tables no longer configured are
    /// ignored; pages are clamped once records arrive.
    pub fn restore(&mut self, state: PersistedState) {
        let PersistedState {
            active_table,
            mut tables,
        } = state;

        for pane in &mut self.panes {
            if let Some(snapshot) = tables.remove(&pane.spec.title) {
                pane.table.restore(snapshot);
            }
        }
        if let Some(title) = active_table {
            if let Some(index) = self.panes.iter().position(|p| p.spec.title == title) {
                self.nav.jump(index);
            }
        }
        if !tables.is_empty() {
            tracing::info!(
                dropped = tables.len(),
                "Ignored saved state for tables no longer configured"
            );
        }
    }
}
