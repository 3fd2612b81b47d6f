//! Game session module - one playthrough, wired to its collaborators
//!
//! [`GameSession`] composes [`Deck`] + [`Scoreboard`] + [`MatchEngine`] and
//! translates engine outcomes into calls on two injected capabilities:
//!
//! - [`Renderer`]: shows/hides card faces, counters, and the win summary.
//! - [`Clock`]: a cancellable once-per-second subscription. The session only
//!   starts and stops it; the platform driver that owns real time delivers
//!   ticks back through [`GameSession::tick_second`].
//!
//! Keeping both behind traits keeps this crate headless: tests drive a
//! session with a recording fake renderer and fake clock, the binary plugs in
//! the terminal surface and a wall clock.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::{Card, Deck};
use crate::engine::{MatchEngine, Phase, SelectOutcome, WinSummary};
use crate::scoreboard::Scoreboard;
use crate::types::{CardId, DECK_SIZE};

/// Rendering surface consumed by the session. Implementations decide how a
/// face-up card or a summary actually looks.
pub trait Renderer {
    /// A fresh deal replaced the board wholesale; all cards are face-down.
    fn show_board(&mut self, cards: &[Card; DECK_SIZE]);
    /// Turn one card face-up.
    fn reveal_card(&mut self, id: CardId);
    /// Flip one card back face-down (after the mismatch was visible).
    fn conceal_card(&mut self, id: CardId);
    /// Lock one card face-up permanently.
    fn mark_matched(&mut self, id: CardId);
    /// The session is won; show the final numbers and the replay affordance.
    fn show_summary(&mut self, summary: &WinSummary);
    /// A replay started; drop the summary overlay.
    fn hide_summary(&mut self);
}

/// Once-per-second timer subscription. `start` after `start` and `stop`
/// after `stop` must be harmless.
pub trait Clock {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// One playthrough: deal, selections, win, replay.
pub struct GameSession<R: Renderer, C: Clock> {
    rng: ChaCha8Rng,
    deck: Deck,
    scoreboard: Scoreboard,
    engine: MatchEngine,
    renderer: R,
    clock: C,
}

impl<R: Renderer, C: Clock> GameSession<R, C> {
    /// Build a session with its first deal already drawn. Nothing is
    /// rendered until [`start`](Self::start).
    pub fn new(seed: u64, renderer: R, clock: C) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::deal(&mut rng);
        Self {
            rng,
            deck,
            scoreboard: Scoreboard::new(),
            engine: MatchEngine::new(),
            renderer,
            clock,
        }
    }

    /// Render the initial face-down board and zero the scoreboard.
    pub fn start(&mut self) {
        self.scoreboard.reset();
        self.renderer.show_board(self.deck.cards());
    }

    /// Forward one card-selection event into the engine and mirror the
    /// outcome onto the renderer and clock.
    pub fn handle_select(&mut self, id: CardId) -> SelectOutcome {
        let outcome = self.engine.select(&mut self.deck, &mut self.scoreboard, id);

        match outcome {
            SelectOutcome::Ignored => {}
            SelectOutcome::FirstRevealed { id, clock_started } => {
                if clock_started {
                    self.clock.start();
                }
                self.renderer.reveal_card(id);
            }
            SelectOutcome::Mismatch { first, second } => {
                self.renderer.reveal_card(second);
                self.renderer.conceal_card(first);
                self.renderer.conceal_card(second);
            }
            SelectOutcome::PairMatched { first, second } => {
                self.renderer.reveal_card(second);
                self.renderer.mark_matched(first);
                self.renderer.mark_matched(second);
            }
            SelectOutcome::Won {
                first,
                second,
                summary,
            } => {
                self.renderer.reveal_card(second);
                self.renderer.mark_matched(first);
                self.renderer.mark_matched(second);
                self.clock.stop();
                self.renderer.show_summary(&summary);
            }
        }

        outcome
    }

    /// One second elapsed on the platform timer. Ignored unless the session
    /// clock is running, so a tick that races a replay cannot land.
    pub fn tick_second(&mut self) {
        if self.clock.is_running() {
            self.scoreboard.tick();
        }
    }

    /// Stop the clock, discard every counter and card, and deal a fresh,
    /// independently shuffled layout. The machine returns to `Idle`.
    pub fn replay(&mut self) {
        self.clock.stop();
        self.engine.reset();
        self.scoreboard.reset();
        self.deck = Deck::deal(&mut self.rng);
        self.renderer.hide_summary();
        self.renderer.show_board(self.deck.cards());
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
