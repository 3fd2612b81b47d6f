//! Key mapping from terminal events to session actions.

use crate::types::SessionAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session actions.
pub fn handle_key_event(key: KeyEvent) -> Option<SessionAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(SessionAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SessionAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SessionAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SessionAction::CursorRight)
        }

        // Flip the card under the cursor (keyboard "activate")
        KeyCode::Enter | KeyCode::Char(' ') => Some(SessionAction::Activate),

        // Replay
        KeyCode::Char('r') | KeyCode::Char('R') => Some(SessionAction::Replay),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
