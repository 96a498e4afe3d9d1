//! Screen layout and rendering.

pub mod table;

use crate::notifications::Notification;
use crate::state::{App, PromptKind};
use crate::theme::Theme;
use crate::widgets::{DetailPanel, FilterBar, FilterOption, PaginationBar};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use tabula_core::{Record, TableView};

const FOOTER_HINT: &str = "/ search • s status • h/l page • : go to • ? help • q quit";

pub fn render_view(f: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    render_filters(f, app, layout[1]);

    let notification = app.current_notification(Utc::now()).cloned();
    let go_to_input = app
        .prompt
        .as_ref()
        .filter(|p| p.kind == PromptKind::GoTo)
        .map(|p| p.buffer.clone());

    let active = app.nav.active();
    let theme = &app.theme;
    let pane = &mut app.panes[active];
    let view = pane.table.view(&pane.records);

    table::render(
        f,
        &pane.spec,
        &view,
        pane.records.len(),
        pane.selected_row,
        theme,
        layout[2],
    );
    render_pagination(f, &view, theme, layout[3]);
    render_footer(f, &view, notification.as_ref(), go_to_input, theme, layout[4]);

    if pane.detail_open {
        if let Some(record) = pane.selected_row.and_then(|row| view.rows.get(row)) {
            let area = centered(f.size(), 60, 60);
            DetailPanel::from_record("Record", record, Style::default().fg(theme.secondary))
                .render(f, area);
        }
    }

    if let Some(modal) = &app.modal {
        let area = centered(f.size(), 70, 50);
        let widget = Paragraph::new(modal.message.as_str())
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(app.theme.text).bg(app.theme.bg))
            .block(
                Block::default()
                    .title(modal.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.primary)),
            );
        f.render_widget(Clear, area);
        f.render_widget(widget, area);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .panes
        .iter()
        .enumerate()
        .map(|(index, pane)| {
            let marker = if pane.load.error.is_some() { " !" } else { "" };
            Line::from(format!("{} {}{}", index + 1, pane.spec.title, marker))
        })
        .collect();

    let load = &app.active().load;
    let (status, color) = match (&load.error, load.loaded_at) {
        (Some(_), _) => ("load failed".to_string(), app.theme.error),
        (None, Some(at)) => (format!("loaded {}", at.format("%H:%M:%S")), app.theme.primary_dim),
        (None, None) => ("loading".to_string(), app.theme.text_dim),
    };

    let tabs = Tabs::new(titles)
        .select(app.nav.active())
        .style(Style::default().fg(app.theme.text_dim))
        .highlight_style(Style::default().fg(app.theme.primary))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(Span::styled(
                    format!("TABULA | {}", status),
                    Style::default().fg(color),
                )),
        );
    f.render_widget(tabs, area);
}

fn render_filters(f: &mut Frame<'_>, app: &App, area: Rect) {
    let pane = app.active();
    let editing = app
        .prompt
        .as_ref()
        .filter(|p| p.kind == PromptKind::Search);
    let search = editing
        .map(|p| p.buffer.as_str())
        .unwrap_or_else(|| pane.table.search_term());

    let current = pane.table.status().as_str();
    let statuses: Vec<FilterOption> = if pane.spec.status_options.is_empty() {
        Vec::new()
    } else {
        pane.status_choices()
            .iter()
            .map(|choice| FilterOption {
                label: choice.to_string(),
                active: choice.as_str().eq_ignore_ascii_case(current),
            })
            .collect()
    };

    FilterBar {
        search,
        editing: editing.is_some(),
        statuses: &statuses,
        label_style: Style::default().fg(app.theme.text_dim),
        search_style: Style::default().fg(app.theme.tertiary),
        active_style: Style::default().fg(app.theme.bg).bg(app.theme.primary),
        inactive_style: Style::default().fg(app.theme.text_dim),
    }
    .render(f, area);
}

fn render_pagination(f: &mut Frame<'_>, view: &TableView<'_, Record>, theme: &Theme, area: Rect) {
    PaginationBar {
        window: &view.window,
        current_page: view.summary.current_page,
        has_previous: view.summary.has_previous,
        has_next: view.summary.has_next,
        current_style: Style::default().fg(theme.primary),
        page_style: Style::default().fg(theme.text),
        disabled_style: Style::default().fg(theme.border),
    }
    .render(f, area);
}

fn render_footer(
    f: &mut Frame<'_>,
    view: &TableView<'_, Record>,
    notification: Option<&Notification>,
    go_to_input: Option<String>,
    theme: &Theme,
    area: Rect,
) {
    let line = if let Some(input) = go_to_input {
        Line::from(vec![
            Span::styled(
                format!("Go to page (1-{}): ", view.summary.total_pages),
                Style::default().fg(theme.text_dim),
            ),
            Span::styled(format!("{}_", input), Style::default().fg(theme.tertiary)),
        ])
    } else if let Some(note) = notification {
        Line::from(Span::styled(
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note, theme)),
        ))
    } else {
        Line::from(vec![
            Span::styled(view.summary.to_string(), Style::default().fg(theme.text)),
            Span::styled(format!("   {}", FOOTER_HINT), Style::default().fg(theme.text_dim)),
        ])
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn notification_color(note: &Notification, theme: &Theme) -> ratatui::style::Color {
    use crate::notifications::NotificationLevel;
    match note.level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
