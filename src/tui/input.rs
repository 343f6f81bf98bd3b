//! Input handling - convert key events to commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::ROOM_SIZE;

/// A frontend command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick the card in room slot `0..4`.
    SelectCard(usize),
    Run,
    NewGame,
    Quit,
}

/// Convert a key event to a command.
///
/// Combat dialog keys are handled by the app, not here.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            (slot < ROOM_SIZE).then_some(Command::SelectCard(slot))
        }
        KeyCode::Char('r') => Some(Command::Run),
        KeyCode::Char('n') => Some(Command::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_card_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('1'))), Some(Command::SelectCard(0)));
        assert_eq!(key_to_command(key(KeyCode::Char('4'))), Some(Command::SelectCard(3)));
        assert_eq!(key_to_command(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(key_to_command(key(KeyCode::Char('r'))), Some(Command::Run));
        assert_eq!(key_to_command(key(KeyCode::Char('n'))), Some(Command::NewGame));
        assert_eq!(key_to_command(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            key_to_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('x'))), None);
    }
}
