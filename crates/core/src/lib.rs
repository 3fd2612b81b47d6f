//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! memory-matching game. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals (for tests)
//! - **Testable**: The whole game can be played headlessly against fakes
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: the 16-card deal - 8 token pairs, Durstenfeld-shuffled
//! - [`scoreboard`]: elapsed seconds, move counting, star rating
//! - [`engine`]: the pair-resolution state machine (the heart of the game)
//! - [`session`]: one playthrough wiring deck + scoreboard + engine to a
//!   [`session::Renderer`] and [`session::Clock`]
//!
//! # Game Rules
//!
//! - 16 cards, 8 matching pairs, dealt face-down in a 4x4 grid
//! - Reveal two cards per pair attempt; a match locks both face-up, a
//!   mismatch flips both back
//! - The clock starts on the first flip and stops on the 8th matched pair
//! - One *move* is one completed pair comparison; incorrect moves erode the
//!   3-star rating (9 misses drop to 2 stars, 13 to 1)
//!
//! # Example
//!
//! ```
//! use tui_match_core::{GameSession, Phase};
//! use tui_match_core::session::{Clock, Renderer};
//! # use tui_match_core::deck::Card;
//! # use tui_match_core::engine::WinSummary;
//! # use tui_match_core::types::{CardId, DECK_SIZE};
//! # struct NullRenderer;
//! # impl Renderer for NullRenderer {
//! #     fn show_board(&mut self, _: &[Card; DECK_SIZE]) {}
//! #     fn reveal_card(&mut self, _: CardId) {}
//! #     fn conceal_card(&mut self, _: CardId) {}
//! #     fn mark_matched(&mut self, _: CardId) {}
//! #     fn show_summary(&mut self, _: &WinSummary) {}
//! #     fn hide_summary(&mut self) {}
//! # }
//! # struct NullClock(bool);
//! # impl Clock for NullClock {
//! #     fn start(&mut self) { self.0 = true; }
//! #     fn stop(&mut self) { self.0 = false; }
//! #     fn is_running(&self) -> bool { self.0 }
//! # }
//!
//! let mut session = GameSession::new(42, NullRenderer, NullClock(false));
//! session.start();
//! assert_eq!(session.phase(), Phase::Idle);
//!
//! // The first selection starts the clock and a pair attempt.
//! session.handle_select(0);
//! assert!(session.clock_running());
//! ```

pub mod deck;
pub mod engine;
pub mod scoreboard;
pub mod session;

pub use tui_match_types as types;

// Re-export commonly used types for convenience
pub use deck::{shuffle_tokens, Card, Deck};
pub use engine::{MatchEngine, Phase, SelectOutcome, WinSummary};
pub use scoreboard::Scoreboard;
pub use session::{Clock, GameSession, Renderer};
