//! SynthBrute theme and color utilities.

use ratatui::style::Color;
use tabula_core::EmptyState;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn synthbrute() -> Self {
        Self {
            bg: Color::Rgb(10, 10, 10),
            bg_highlight: Color::Rgb(42, 42, 42),
            primary: Color::Rgb(0, 255, 255),
            primary_dim: Color::Rgb(0, 136, 136),
            secondary: Color::Rgb(255, 0, 255),
            tertiary: Color::Rgb(255, 255, 0),
            success: Color::Rgb(0, 255, 0),
            warning: Color::Rgb(255, 255, 0),
            error: Color::Rgb(255, 0, 0),
            info: Color::Rgb(0, 255, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(136, 136, 136),
            border: Color::Rgb(68, 68, 68),
            border_focus: Color::Rgb(0, 255, 255),
        }
    }
}

/// Color for a record's status cell.
pub fn status_color(status: &str, theme: &Theme) -> Color {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" | "open" | "approved" | "paid" | "awarded" | "completed" => theme.success,
        "pending" | "draft" | "in review" | "submitted" => theme.warning,
        "closed" | "inactive" | "rejected" | "suspended" | "cancelled" | "overdue" => theme.error,
        _ => theme.text_dim,
    }
}

pub fn empty_state_color(state: EmptyState, theme: &Theme) -> Color {
    match state {
        EmptyState::NoData => theme.text_dim,
        EmptyState::NoMatches => theme.warning,
    }
}
