//! Match engine module - the pair-resolution state machine
//!
//! The engine receives discrete `select(id)` events and decides whether each
//! one starts a new pair, completes one, or means nothing. It owns the
//! pending-card slot and the matched-pair counter; card faces live in the
//! [`Deck`] and counters in the [`Scoreboard`], both mutated only through
//! `select`.
//!
//! # Phases
//!
//! ```text
//! Idle --first select--> AwaitingFirst/AwaitingSecond --8th pair--> Won
//!  ^                                                                 |
//!  +------------------------------ reset ---------------------------+
//! ```
//!
//! `Idle` means the session clock has not started yet; the first selection
//! of a session starts it. `Won` is terminal: every further event is a
//! no-op until `reset`.
//!
//! # Event policy
//!
//! Inputs arrive pre-validated only in the sense that they are card ids;
//! anything else about them can be garbage. An unknown id, an
//! already-matched card, a re-selection of the pending card, or any event in
//! `Won` resolves to [`SelectOutcome::Ignored`] with no state change. Rapid
//! double-activation of one card therefore cannot corrupt a pair attempt.

use crate::deck::Deck;
use crate::scoreboard::Scoreboard;
use crate::types::{CardId, PAIR_COUNT};

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Session not started; clock stopped.
    Idle,
    /// Clock running, no pending card.
    AwaitingFirst,
    /// One card pending; the next distinct selection completes a pair.
    AwaitingSecond,
    /// All 8 pairs found. Terminal until `reset`.
    Won,
}

/// Final numbers carried by the win signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinSummary {
    pub elapsed_seconds: u32,
    pub moves: u32,
    pub incorrect_moves: u32,
    pub stars: u8,
}

impl WinSummary {
    fn capture(scoreboard: &Scoreboard) -> Self {
        Self {
            elapsed_seconds: scoreboard.elapsed_seconds(),
            moves: scoreboard.moves(),
            incorrect_moves: scoreboard.incorrect_moves(),
            stars: scoreboard.stars_remaining(),
        }
    }
}

/// What a `select` event did, for the session to translate into renderer
/// and clock calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Unknown id, matched card, re-selected pending card, or `Won` phase.
    Ignored,
    /// A new pair attempt started; the card is now face-up and pending.
    FirstRevealed {
        id: CardId,
        /// True on the `Idle -> AwaitingFirst` edge: the session clock
        /// must start ticking.
        clock_started: bool,
    },
    /// Pair completed without a match; both cards flip back.
    Mismatch { first: CardId, second: CardId },
    /// Pair completed with a match; both cards stay revealed for good.
    PairMatched { first: CardId, second: CardId },
    /// The matched pair was the 8th: the session is over and the clock
    /// must stop.
    Won {
        first: CardId,
        second: CardId,
        summary: WinSummary,
    },
}

/// The pair-resolution state machine.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    phase: Phase,
    pending: Option<CardId>,
    matched_pairs: usize,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pending: None,
            matched_pairs: 0,
        }
    }

    /// Process one card-selection event against the current deal.
    pub fn select(
        &mut self,
        deck: &mut Deck,
        scoreboard: &mut Scoreboard,
        id: CardId,
    ) -> SelectOutcome {
        if self.phase == Phase::Won {
            return SelectOutcome::Ignored;
        }

        let token = match deck.card(id) {
            Some(card) if !card.matched && self.pending != Some(id) => card.token,
            _ => return SelectOutcome::Ignored,
        };

        let first = match self.pending {
            None => {
                // First card of a new pair: nothing to compare yet.
                let clock_started = self.phase == Phase::Idle;
                self.pending = Some(id);
                self.phase = Phase::AwaitingSecond;
                if let Some(card) = deck.card_mut(id) {
                    card.revealed = true;
                }
                return SelectOutcome::FirstRevealed { id, clock_started };
            }
            Some(first) => first,
        };

        // Second card: the pair attempt completes here, match or not.
        let first_token = match deck.card(first) {
            Some(card) => card.token,
            None => return SelectOutcome::Ignored,
        };
        let matched = token == first_token;

        scoreboard.record_move(matched);
        self.pending = None;

        if matched {
            for card_id in [first, id] {
                if let Some(card) = deck.card_mut(card_id) {
                    card.revealed = true;
                    card.matched = true;
                }
            }
            self.matched_pairs += 1;

            if self.matched_pairs == PAIR_COUNT {
                self.phase = Phase::Won;
                return SelectOutcome::Won {
                    first,
                    second: id,
                    summary: WinSummary::capture(scoreboard),
                };
            }

            self.phase = Phase::AwaitingFirst;
            SelectOutcome::PairMatched { first, second: id }
        } else {
            for card_id in [first, id] {
                if let Some(card) = deck.card_mut(card_id) {
                    card.revealed = false;
                }
            }
            self.phase = Phase::AwaitingFirst;
            SelectOutcome::Mismatch { first, second: id }
        }
    }

    /// Back to `Idle`: pending slot and pair counter cleared. Dealing a
    /// fresh layout is the session's job, not the engine's.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.pending = None;
        self.matched_pairs = 0;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<CardId> {
        self.pending
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
