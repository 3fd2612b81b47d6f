//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::SessionAction`] and tracks a
//! grid cursor so discrete key presses become `select(card_id)` events,
//! giving keyboard play the same shape a pointer click would have.

pub mod cursor;
pub mod map;

pub use tui_match_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
