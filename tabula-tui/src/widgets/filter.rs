//! Filter bar widget: search text plus status selector.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

pub struct FilterBar<'a> {
    pub search: &'a str,
    /// Whether the search prompt has focus
    pub editing: bool,
    pub statuses: &'a [FilterOption],
    pub label_style: Style,
    pub search_style: Style,
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Search: ", self.label_style)];
        if self.search.is_empty() && !self.editing {
            spans.push(Span::styled("(press /)", self.inactive_style));
        } else {
            spans.push(Span::styled(self.search.to_string(), self.search_style));
        }
        if self.editing {
            spans.push(Span::styled("_", self.search_style));
        }

        if !self.statuses.is_empty() {
            spans.push(Span::styled("   Status: ", self.label_style));
            spans.extend(self.statuses.iter().map(|status| {
                let style = if status.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {} ", status.label), style)
            }));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph =
            Paragraph::new(self.line()).block(Block::default().title("Filters").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
