//! Grid cursor: turns discrete movement keys into card ids.
//!
//! The terminal has no pointer, so "which card did the player activate" is
//! tracked here: a cursor over the 4x4 grid that clamps at the edges. The
//! card id under the cursor is row-major, matching the deal's id layout.

use crate::types::{CardId, SessionAction, GRID_COLS, GRID_ROWS};

/// Cursor position over the 4x4 card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    col: u8,
    row: u8,
}

impl GridCursor {
    /// Cursor starts on the top-left card.
    pub fn new() -> Self {
        Self { col: 0, row: 0 }
    }

    /// Apply a movement action; non-movement actions are ignored here.
    /// Movement past an edge clamps rather than wrapping.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::CursorUp => self.row = self.row.saturating_sub(1),
            SessionAction::CursorDown => self.row = (self.row + 1).min(GRID_ROWS - 1),
            SessionAction::CursorLeft => self.col = self.col.saturating_sub(1),
            SessionAction::CursorRight => self.col = (self.col + 1).min(GRID_COLS - 1),
            SessionAction::Activate | SessionAction::Replay => {}
        }
    }

    /// Id of the card under the cursor.
    pub fn card_id(&self) -> CardId {
        self.row * GRID_COLS + self.col
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }
}

impl Default for GridCursor {
    fn default() -> Self {
        Self::new()
    }
}
