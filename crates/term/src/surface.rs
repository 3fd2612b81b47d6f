//! BoardModel: the retained render state behind `core::Renderer`.
//!
//! The core resolves a mismatch instantly; a terminal has no flip animation
//! to carry the reveal, so the surface keeps a mismatched pair face-up for
//! [`MISMATCH_HOLD_MS`] before showing it face-down again. The hold is purely
//! presentational: the engine has already flipped the cards back by the time
//! `conceal_card` arrives.

use arrayvec::ArrayVec;

use crate::core::{Card, Renderer, WinSummary};
use crate::types::{CardId, Token, DECK_SIZE, MISMATCH_HOLD_MS};

/// What one card currently looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Face-down, back glyph showing.
    Down,
    /// Face-up as the pending half of a pair attempt.
    Up,
    /// Face-up for good.
    Matched,
    /// Mismatched: still face-up for `remaining_ms`, then down.
    Concealing { remaining_ms: u32 },
}

/// Render-side board state: one face per card plus the summary overlay.
#[derive(Debug, Clone)]
pub struct BoardModel {
    tokens: [Token; DECK_SIZE],
    faces: [Face; DECK_SIZE],
    summary: Option<WinSummary>,
}

impl BoardModel {
    pub fn new() -> Self {
        Self {
            tokens: [Token::Tulip; DECK_SIZE],
            faces: [Face::Down; DECK_SIZE],
            summary: None,
        }
    }

    /// The token a card shows when face-up.
    pub fn token(&self, id: CardId) -> Option<Token> {
        self.tokens.get(id as usize).copied()
    }

    pub fn face(&self, id: CardId) -> Face {
        self.faces
            .get(id as usize)
            .copied()
            .unwrap_or(Face::Down)
    }

    pub fn summary(&self) -> Option<&WinSummary> {
        self.summary.as_ref()
    }

    /// Ids currently in a conceal hold. At most one mismatched pair can be
    /// in flight, so two slots suffice.
    pub fn concealing_ids(&self) -> ArrayVec<CardId, 2> {
        let mut ids = ArrayVec::new();
        for (i, face) in self.faces.iter().enumerate() {
            if matches!(face, Face::Concealing { .. }) && !ids.is_full() {
                ids.push(i as CardId);
            }
        }
        ids
    }

    /// Advance conceal holds by `elapsed_ms`; expired holds turn face-down.
    pub fn advance(&mut self, elapsed_ms: u32) {
        for face in self.faces.iter_mut() {
            if let Face::Concealing { remaining_ms } = face {
                *face = match remaining_ms.checked_sub(elapsed_ms) {
                    Some(left) if left > 0 => Face::Concealing { remaining_ms: left },
                    _ => Face::Down,
                };
            }
        }
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for BoardModel {
    fn show_board(&mut self, cards: &[Card; DECK_SIZE]) {
        for (i, card) in cards.iter().enumerate() {
            self.tokens[i] = card.token;
        }
        self.faces = [Face::Down; DECK_SIZE];
    }

    fn reveal_card(&mut self, id: CardId) {
        if let Some(face) = self.faces.get_mut(id as usize) {
            *face = Face::Up;
        }
    }

    fn conceal_card(&mut self, id: CardId) {
        if let Some(face) = self.faces.get_mut(id as usize) {
            *face = match *face {
                // Was showing: let the player see the mismatch first.
                Face::Up | Face::Concealing { .. } => Face::Concealing {
                    remaining_ms: MISMATCH_HOLD_MS,
                },
                other => other,
            };
        }
    }

    fn mark_matched(&mut self, id: CardId) {
        if let Some(face) = self.faces.get_mut(id as usize) {
            *face = Face::Matched;
        }
    }

    fn show_summary(&mut self, summary: &WinSummary) {
        self.summary = Some(*summary);
    }

    fn hide_summary(&mut self) {
        self.summary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tui_match_core::Deck;

    fn model_with_board() -> BoardModel {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let deck = Deck::deal(&mut rng);
        let mut model = BoardModel::new();
        model.show_board(deck.cards());
        model
    }

    #[test]
    fn show_board_resets_faces_and_captures_tokens() {
        let model = model_with_board();
        for id in 0..16u8 {
            assert_eq!(model.face(id), Face::Down);
        }
        // Tokens come from the deal, two of each.
        for token in Token::ALL {
            let count = (0..16u8).filter(|id| model.token(*id) == Some(token)).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn reveal_and_match_change_faces() {
        let mut model = model_with_board();
        model.reveal_card(3);
        assert_eq!(model.face(3), Face::Up);
        model.mark_matched(3);
        assert_eq!(model.face(3), Face::Matched);
    }

    #[test]
    fn conceal_holds_before_flipping_down() {
        let mut model = model_with_board();
        model.reveal_card(1);
        model.conceal_card(1);

        assert_eq!(
            model.face(1),
            Face::Concealing {
                remaining_ms: MISMATCH_HOLD_MS
            }
        );
        assert_eq!(model.concealing_ids().as_slice(), &[1]);

        model.advance(MISMATCH_HOLD_MS / 2);
        assert!(matches!(model.face(1), Face::Concealing { .. }));

        model.advance(MISMATCH_HOLD_MS);
        assert_eq!(model.face(1), Face::Down);
        assert!(model.concealing_ids().is_empty());
    }

    #[test]
    fn conceal_on_face_down_card_stays_down() {
        let mut model = model_with_board();
        model.conceal_card(2);
        assert_eq!(model.face(2), Face::Down);
    }

    #[test]
    fn summary_toggles() {
        let mut model = model_with_board();
        assert!(model.summary().is_none());

        let summary = WinSummary {
            elapsed_seconds: 30,
            moves: 12,
            incorrect_moves: 4,
            stars: 3,
        };
        model.show_summary(&summary);
        assert_eq!(model.summary(), Some(&summary));

        model.hide_summary();
        assert!(model.summary().is_none());
    }
}
