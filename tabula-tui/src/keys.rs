//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTable,
    PrevTable,
    SwitchTable(usize),
    RowUp,
    RowDown,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    OpenSearch,
    CycleStatus,
    OpenGoTo,
    ClearFilters,
    GrowPage,
    ShrinkPage,
    ToggleDetail,
    OpenHelp,
    Refresh,
    Cancel,
}

/// Keys while a prompt (search or go-to) has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char(':') => Some(Action::OpenGoTo),
        KeyCode::Char('s') => Some(Action::CycleStatus),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('+') => Some(Action::GrowPage),
        KeyCode::Char('-') => Some(Action::ShrinkPage),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstPage),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastPage),
        KeyCode::Enter => Some(Action::ToggleDetail),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextTable),
        KeyCode::BackTab => Some(Action::PrevTable),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::RowUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::RowDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SwitchTable(c as usize - '1' as usize)),
        _ => None,
    }
}

pub fn map_prompt_key(event: KeyEvent) -> Option<PromptAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(PromptAction::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter => Some(PromptAction::Submit),
        KeyCode::Esc => Some(PromptAction::Cancel),
        KeyCode::Backspace => Some(PromptAction::Backspace),
        KeyCode::Char(c) => Some(PromptAction::Insert(c)),
        _ => None,
    }
}
