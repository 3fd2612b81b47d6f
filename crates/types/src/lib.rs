//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid of 16 cards:
//!
//! - **Columns**: 4 (indexed 0-3)
//! - **Rows**: 4 (indexed 0-3)
//! - **Card ids**: 0-15, row-major (`id = row * 4 + col`), stable per deal
//!
//! # Scoring Constants
//!
//! The star rating is a step function of incorrect pair attempts:
//!
//! | Incorrect moves | Stars |
//! |-----------------|-------|
//! | 0-8 | 3 |
//! | 9-12 | 2 |
//! | 13+ | 1 |
//!
//! # Timing Constants
//!
//! - `CLOCK_TICK_MS`: 1000ms - the session clock advances once per second
//! - `MISMATCH_HOLD_MS`: 600ms - how long a mismatched pair stays visible
//!   before flipping back
//!
//! # Examples
//!
//! ```
//! use tui_match_types::{SessionAction, Token, DECK_SIZE, PAIR_COUNT};
//!
//! // Tokens round-trip through their string names
//! let token = Token::Rose;
//! assert_eq!(Token::from_str("rose"), Some(token));
//! assert_eq!(token.as_str(), "rose");
//!
//! // Every token renders as a distinct glyph
//! assert_eq!(Token::Rose.glyph(), '\u{1F339}');
//!
//! // Input actions round-trip too
//! let action = SessionAction::from_str("activate").unwrap();
//! assert_eq!(action, SessionAction::Activate);
//!
//! // Deck shape
//! assert_eq!(DECK_SIZE, 16);
//! assert_eq!(PAIR_COUNT, 8);
//! ```

/// Number of cards in a deal (16)
pub const DECK_SIZE: usize = 16;

/// Number of matching pairs in a deal (8)
pub const PAIR_COUNT: usize = 8;

/// Board width in cards (4 columns)
pub const GRID_COLS: u8 = 4;

/// Board height in cards (4 rows)
pub const GRID_ROWS: u8 = 4;

/// Session clock tick interval (1000ms = 1 second)
pub const CLOCK_TICK_MS: u32 = 1000;

/// How long a mismatched pair stays face-up before flipping back (600ms)
pub const MISMATCH_HOLD_MS: u32 = 600;

/// Highest incorrect-move count that still rates 3 stars (8)
pub const THREE_STAR_MAX_MISSES: u32 = 8;

/// Highest incorrect-move count that still rates 2 stars (12)
pub const TWO_STAR_MAX_MISSES: u32 = 12;

/// Glyph shown on every face-down card (U+1F490 BOUQUET)
pub const CARD_BACK_GLYPH: char = '\u{1F490}';

/// A card's position in the deal, 0..16, row-major across the 4x4 grid.
///
/// Stable for the lifetime of one deal; a replay produces a fresh mapping.
pub type CardId = u8;

/// The eight flower symbols that define matching pairs
///
/// Each symbol appears on exactly two cards per deal. The glyphs are the
/// Unicode flowers the game has always used:
///
/// - **Tulip**: U+1F337
/// - **CherryBlossom**: U+1F338
/// - **Rose**: U+1F339
/// - **Hibiscus**: U+1F33A
/// - **Sunflower**: U+1F33B
/// - **Blossom**: U+1F33C
/// - **Clover**: U+1F340
/// - **Rosette**: U+1F3F5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Tulip,
    CherryBlossom,
    Rose,
    Hibiscus,
    Sunflower,
    Blossom,
    Clover,
    Rosette,
}

impl Token {
    /// All eight tokens, one per pair, in declaration order.
    pub const ALL: [Token; PAIR_COUNT] = [
        Token::Tulip,
        Token::CherryBlossom,
        Token::Rose,
        Token::Hibiscus,
        Token::Sunflower,
        Token::Blossom,
        Token::Clover,
        Token::Rosette,
    ];

    /// The glyph drawn on this token's card face
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match_types::Token;
    ///
    /// assert_eq!(Token::Tulip.glyph(), '\u{1F337}');
    /// assert_eq!(Token::Clover.glyph(), '\u{1F340}');
    /// ```
    pub fn glyph(&self) -> char {
        match self {
            Token::Tulip => '\u{1F337}',
            Token::CherryBlossom => '\u{1F338}',
            Token::Rose => '\u{1F339}',
            Token::Hibiscus => '\u{1F33A}',
            Token::Sunflower => '\u{1F33B}',
            Token::Blossom => '\u{1F33C}',
            Token::Clover => '\u{1F340}',
            Token::Rosette => '\u{1F3F5}',
        }
    }

    /// Parse a token from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match_types::Token;
    ///
    /// assert_eq!(Token::from_str("rose"), Some(Token::Rose));
    /// assert_eq!(Token::from_str("CLOVER"), Some(Token::Clover));
    /// assert_eq!(Token::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tulip" => Some(Token::Tulip),
            "cherryblossom" => Some(Token::CherryBlossom),
            "rose" => Some(Token::Rose),
            "hibiscus" => Some(Token::Hibiscus),
            "sunflower" => Some(Token::Sunflower),
            "blossom" => Some(Token::Blossom),
            "clover" => Some(Token::Clover),
            "rosette" => Some(Token::Rosette),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Tulip => "tulip",
            Token::CherryBlossom => "cherryblossom",
            Token::Rose => "rose",
            Token::Hibiscus => "hibiscus",
            Token::Sunflower => "sunflower",
            Token::Blossom => "blossom",
            Token::Clover => "clover",
            Token::Rosette => "rosette",
        }
    }
}

/// Player actions delivered by the input layer
///
/// Cursor movement navigates the 4x4 grid; `Activate` selects the card
/// under the cursor (pointer and keyboard activation both land here, which
/// is what keeps the two input styles equivalent); `Replay` restarts the
/// session at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Move the cursor one card up
    CursorUp,
    /// Move the cursor one card down
    CursorDown,
    /// Move the cursor one card left
    CursorLeft,
    /// Move the cursor one card right
    CursorRight,
    /// Select the card under the cursor
    Activate,
    /// Restart the session with a fresh deal
    Replay,
}

impl SessionAction {
    /// Parse an action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match_types::SessionAction;
    ///
    /// assert_eq!(SessionAction::from_str("cursorUp"), Some(SessionAction::CursorUp));
    /// assert_eq!(SessionAction::from_str("replay"), Some(SessionAction::Replay));
    /// assert_eq!(SessionAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(SessionAction::CursorUp),
            "cursordown" => Some(SessionAction::CursorDown),
            "cursorleft" => Some(SessionAction::CursorLeft),
            "cursorright" => Some(SessionAction::CursorRight),
            "activate" => Some(SessionAction::Activate),
            "replay" => Some(SessionAction::Replay),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::CursorUp => "cursorUp",
            SessionAction::CursorDown => "cursorDown",
            SessionAction::CursorLeft => "cursorLeft",
            SessionAction::CursorRight => "cursorRight",
            SessionAction::Activate => "activate",
            SessionAction::Replay => "replay",
        }
    }
}
