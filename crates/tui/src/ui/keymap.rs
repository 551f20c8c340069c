use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Section(Section),
    Cancel,
    NextField,
    Submit,
    Backspace,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::Quit;
        }
    }

    match key.code {
        KeyCode::F(1) => AppAction::Section(Section::Bank),
        KeyCode::F(2) => AppAction::Section(Section::Calculator),
        KeyCode::F(3) => AppAction::Section(Section::Registration),
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}
