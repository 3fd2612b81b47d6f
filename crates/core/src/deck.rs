//! Deck module - shuffled card layouts
//!
//! A deal duplicates the eight tokens into a 16-token multiset, shuffles it
//! with an unbiased Durstenfeld pass, and assigns each token a stable card id.
//! Shuffling is driven by a caller-supplied [`ChaCha8Rng`] so layouts are
//! deterministic per seed and independent across replays.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::types::{CardId, Token, DECK_SIZE};

/// One card in the current deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Position in the deal, 0..16, fixed until the next deal
    pub id: CardId,
    /// The symbol this card shares with exactly one other card
    pub token: Token,
    /// Face-up right now (pending or matched)
    pub revealed: bool,
    /// Permanently resolved as half of a found pair
    pub matched: bool,
}

/// An ordered deal of 16 cards, ids mapped 1:1 to positions.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

/// Duplicate each token twice and shuffle the result in place.
///
/// Durstenfeld variant of Fisher-Yates: walk i from the last index down to 1
/// and swap with a uniform j in `0..=i`, so every one of the 16! orderings is
/// equally likely.
pub fn shuffle_tokens(rng: &mut ChaCha8Rng) -> [Token; DECK_SIZE] {
    let mut tokens = [Token::Tulip; DECK_SIZE];
    for (i, token) in Token::ALL.iter().enumerate() {
        tokens[i * 2] = *token;
        tokens[i * 2 + 1] = *token;
    }

    for i in (1..DECK_SIZE).rev() {
        let j = rng.gen_range(0..=i);
        tokens.swap(i, j);
    }

    tokens
}

impl Deck {
    /// Deal a fresh shuffled layout: all cards face-down and unmatched.
    pub fn deal(rng: &mut ChaCha8Rng) -> Self {
        let tokens = shuffle_tokens(rng);
        let mut cards = [Card {
            id: 0,
            token: Token::Tulip,
            revealed: false,
            matched: false,
        }; DECK_SIZE];

        for (i, token) in tokens.iter().enumerate() {
            cards[i] = Card {
                id: i as CardId,
                token: *token,
                revealed: false,
                matched: false,
            };
        }

        Self { cards }
    }

    /// All 16 cards in id order.
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Look up a card by id. `None` for ids outside 0..16.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id as usize)
    }

    /// Number of cards currently marked matched.
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }
}
