//! Key bindings for the terminal front end

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::command::Command;
use crate::spatial::Direction;

/// Map a key event to a command
///
/// Only presses and repeats count; releases are ignored so terminals that
/// report them do not double every move.
pub fn map_key(event: &KeyEvent) -> Option<Command> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(event.code, KeyCode::Char('c' | 'C')).then_some(Command::Quit);
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Move(Direction::Right)),
        KeyCode::Char('n' | 'N') => Some(Command::NewGame),
        KeyCode::Char('r' | 'R') | KeyCode::Enter => Some(Command::ConfirmRestart),
        KeyCode::Char('+' | '=') => Some(Command::Resize(1)),
        KeyCode::Char('-' | '_') => Some(Command::Resize(-1)),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Key help shown under the board
pub const KEY_HELP: &str = "arrows/wasd move  n new game  +/- board size  q quit";
