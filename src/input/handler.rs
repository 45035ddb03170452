use crossterm::event::{KeyCode, KeyEventKind};

use crate::input::command::Command;

/// Arrow keys drive the piece; anything else is not a game command.
pub fn command_for(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        _ => None,
    }
}

/// Command for a key event, counting presses and repeats only.
pub fn key_command(key_code: KeyCode, kind: KeyEventKind) -> Option<Command> {
    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => command_for(key_code),
        KeyEventKind::Release => None,
    }
}
