//! Record table view.

use crate::config::{ColumnSpec, TableSpec};
use crate::theme::{empty_state_color, status_color, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState as RowCursor},
    Frame,
};
use tabula_core::{lookup_path, stringify, EmptyState, Record, TableView};

pub fn empty_state_message(state: EmptyState) -> &'static str {
    match state {
        EmptyState::NoData => "No records available",
        EmptyState::NoMatches => "No results match the current search or status filter",
    }
}

/// Text shown in `column` for `record`; missing fields render empty.
pub fn cell_text(record: &Record, column: &ColumnSpec) -> String {
    lookup_path(record, &column.key)
        .map(|value| stringify(value).into_owned())
        .unwrap_or_default()
}

pub fn render(
    f: &mut Frame<'_>,
    spec: &TableSpec,
    view: &TableView<'_, Record>,
    total_records: usize,
    selected_row: Option<usize>,
    theme: &Theme,
    area: Rect,
) {
    let title = if view.summary.total_items == total_records {
        format!("{} ({} records)", spec.title, total_records)
    } else {
        format!(
            "{} ({} of {} records)",
            spec.title, view.summary.total_items, total_records
        )
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focus));

    if let Some(state) = view.empty_state {
        let message = Paragraph::new(empty_state_message(state))
            .alignment(Alignment::Center)
            .style(Style::default().fg(empty_state_color(state, theme)))
            .block(block);
        f.render_widget(message, area);
        return;
    }

    let header = Row::new(spec.columns.iter().map(|column| Cell::from(column.label.clone())))
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        );

    let rows = view.rows.iter().map(|record| {
        Row::new(spec.columns.iter().map(|column| {
            let text = cell_text(record, column);
            let style = if spec.status_key.as_deref() == Some(column.key.as_str()) {
                Style::default().fg(status_color(&text, theme))
            } else {
                Style::default().fg(theme.text)
            };
            Cell::from(text).style(style)
        }))
    });

    let total_width: u32 = spec.columns.iter().map(|c| u32::from(c.width)).sum();
    let widths: Vec<Constraint> = spec
        .columns
        .iter()
        .map(|c| Constraint::Ratio(u32::from(c.width), total_width.max(1)))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(theme.bg_highlight).fg(theme.secondary))
        .highlight_symbol("> ");

    let mut cursor = RowCursor::default();
    cursor.select(selected_row);
    f.render_stateful_widget(table, area, &mut cursor);
}
