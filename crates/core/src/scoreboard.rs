//! Scoreboard module - elapsed time, move counting, and the star rating
//!
//! One move is one completed pair comparison; flipping the first card of a
//! pair never counts. The star rating is a pure step function of incorrect
//! moves, so it can only fall as a session goes on and only `reset` brings
//! it back to 3.

use crate::types::{THREE_STAR_MAX_MISSES, TWO_STAR_MAX_MISSES};

/// Per-session counters: seconds on the clock, pair attempts, and misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    elapsed_seconds: u32,
    moves: u32,
    incorrect_moves: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one second. Called once per second while the
    /// session clock is running.
    pub fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }

    /// Record one completed pair comparison.
    pub fn record_move(&mut self, was_correct: bool) {
        self.moves += 1;
        if !was_correct {
            self.incorrect_moves += 1;
        }
    }

    /// Star rating derived from incorrect moves: 0-8 misses keep 3 stars,
    /// 9-12 drop to 2, anything beyond 12 is 1.
    pub fn stars_remaining(&self) -> u8 {
        if self.incorrect_moves <= THREE_STAR_MAX_MISSES {
            3
        } else if self.incorrect_moves <= TWO_STAR_MAX_MISSES {
            2
        } else {
            1
        }
    }

    /// Zero all three counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn incorrect_moves(&self) -> u32 {
        self.incorrect_moves
    }
}
