//! Pagination control: `‹ 1 … 4 [5] 6 … 10 ›`.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tabula_core::PageToken;

pub const PREVIOUS_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";
pub const ELLIPSIS: &str = "…";

pub struct PaginationBar<'a> {
    pub window: &'a [PageToken],
    pub current_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub current_style: Style,
    pub page_style: Style,
    pub disabled_style: Style,
}

impl<'a> PaginationBar<'a> {
    pub fn spans(&self) -> Vec<Span<'static>> {
        let arrow_style = |enabled: bool| {
            if enabled {
                self.page_style
            } else {
                self.disabled_style
            }
        };

        let mut spans = vec![Span::styled(PREVIOUS_ARROW, arrow_style(self.has_previous))];
        for token in self.window {
            spans.push(Span::raw(" "));
            spans.push(match token {
                PageToken::Page(page) if *page == self.current_page => {
                    Span::styled(format!("[{}]", page), self.current_style)
                }
                PageToken::Page(page) => Span::styled(page.to_string(), self.page_style),
                PageToken::Ellipsis => Span::styled(ELLIPSIS, self.disabled_style),
            });
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(NEXT_ARROW, arrow_style(self.has_next)));
        spans
    }

    /// Plain-text rendering of the control.
    pub fn label(&self) -> String {
        self.spans().iter().map(|span| span.content.as_ref()).collect()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
