//! Detail panel widget for showing every field of a record.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tabula_core::{stringify, Record};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(String, String)>,
    pub label_style: Style,
}

impl<'a> DetailPanel<'a> {
    /// One line per top-level field, in record order.
    pub fn from_record(title: &'a str, record: &Record, label_style: Style) -> Self {
        let fields = record
            .iter()
            .map(|(key, value)| (key.clone(), stringify(value).into_owned()))
            .collect();
        Self {
            title,
            fields,
            label_style,
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.label_style),
                    Span::raw(value.as_str()),
                ])
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(widget, area);
    }
}
