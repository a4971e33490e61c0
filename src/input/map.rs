//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent};

use crate::types::Command;

/// Map keyboard input to a command. Unmapped keys are ignored.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left => Some(Command::Left),
        KeyCode::Right => Some(Command::Right),
        KeyCode::Down => Some(Command::Down),

        // Rotation
        KeyCode::Char(' ') => Some(Command::Rotate),

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(Command::Exit),

        _ => None,
    }
}
