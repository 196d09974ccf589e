//! Key bindings for the counter screen

use crate::actions::Action;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the main loop should do with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('-') | KeyCode::Left => Some(Command::Dispatch(Action::Decrement)),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            Some(Command::Dispatch(Action::Increment))
        }
        KeyCode::Char('f') => Some(Command::Dispatch(Action::RequestFact)),
        KeyCode::Char('t') => Some(Command::Dispatch(Action::ToggleTimer)),
        _ => None,
    }
}
