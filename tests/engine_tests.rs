//! Match engine transition-table tests covering pair resolution,
//! move counting, and the terminal won state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_match::core::{Deck, MatchEngine, Phase, Scoreboard, SelectOutcome};
use tui_match::types::CardId;

fn fresh(seed: u64) -> (Deck, Scoreboard, MatchEngine) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (Deck::deal(&mut rng), Scoreboard::new(), MatchEngine::new())
}

fn partner_of(deck: &Deck, id: CardId) -> CardId {
    let token = deck.card(id).unwrap().token;
    deck.cards()
        .iter()
        .find(|c| c.token == token && c.id != id)
        .unwrap()
        .id
}

fn stranger_of(deck: &Deck, id: CardId) -> CardId {
    let token = deck.card(id).unwrap().token;
    deck.cards()
        .iter()
        .find(|c| c.token != token && !c.matched)
        .unwrap()
        .id
}

/// Scenario A: two cards sharing a token match and stay revealed.
#[test]
fn matching_pair_is_rewarded() {
    let (mut deck, mut sb, mut engine) = fresh(1);
    let partner = partner_of(&deck, 0);

    engine.select(&mut deck, &mut sb, 0);
    let outcome = engine.select(&mut deck, &mut sb, partner);

    assert!(matches!(outcome, SelectOutcome::PairMatched { .. }));
    assert!(deck.card(0).unwrap().matched);
    assert!(deck.card(partner).unwrap().matched);
    assert_eq!(sb.moves(), 1);
    assert_eq!(sb.incorrect_moves(), 0);
    assert_eq!(sb.stars_remaining(), 3);
}

/// Scenario B: a mismatch conceals both cards and costs an incorrect move.
#[test]
fn mismatched_pair_is_concealed() {
    let (mut deck, mut sb, mut engine) = fresh(1);
    let stranger = stranger_of(&deck, 0);

    engine.select(&mut deck, &mut sb, 0);
    let outcome = engine.select(&mut deck, &mut sb, stranger);

    assert!(matches!(outcome, SelectOutcome::Mismatch { .. }));
    assert!(!deck.card(0).unwrap().revealed);
    assert!(!deck.card(stranger).unwrap().revealed);
    assert!(deck.cards().iter().all(|c| !c.matched));
    assert_eq!(sb.moves(), 1);
    assert_eq!(sb.incorrect_moves(), 1);
    assert_eq!(sb.stars_remaining(), 3);
}

/// Scenario C: the 9th mismatch costs the first star.
#[test]
fn nine_mismatches_drop_to_two_stars() {
    let (mut deck, mut sb, mut engine) = fresh(1);
    let stranger = stranger_of(&deck, 0);

    for _ in 0..9 {
        engine.select(&mut deck, &mut sb, 0);
        let outcome = engine.select(&mut deck, &mut sb, stranger);
        assert!(matches!(outcome, SelectOutcome::Mismatch { .. }));
    }

    assert_eq!(sb.incorrect_moves(), 9);
    assert_eq!(sb.stars_remaining(), 2);
}

/// Scenario D: a perfect game wins with 8 moves and all stars.
#[test]
fn perfect_game_wins_with_three_stars() {
    let (mut deck, mut sb, mut engine) = fresh(4);

    let mut summary = None;
    for id in 0..16u8 {
        if deck.card(id).unwrap().matched {
            continue;
        }
        let partner = partner_of(&deck, id);
        engine.select(&mut deck, &mut sb, id);
        if let SelectOutcome::Won { summary: s, .. } = engine.select(&mut deck, &mut sb, partner) {
            summary = Some(s);
        }
    }

    let summary = summary.expect("last pair must win");
    assert_eq!(summary.moves, 8);
    assert_eq!(summary.incorrect_moves, 0);
    assert_eq!(summary.stars, 3);
    assert_eq!(engine.phase(), Phase::Won);
    assert_eq!(deck.matched_count(), 16);
}

/// P3: a move is one completed comparison, never a first flip.
#[test]
fn first_flip_is_not_a_move() {
    let (mut deck, mut sb, mut engine) = fresh(1);

    engine.select(&mut deck, &mut sb, 0);
    assert_eq!(sb.moves(), 0);

    let stranger = stranger_of(&deck, 0);
    engine.select(&mut deck, &mut sb, stranger);
    assert_eq!(sb.moves(), 1);

    // Next first flip again does not count.
    engine.select(&mut deck, &mut sb, 0);
    assert_eq!(sb.moves(), 1);
}

/// P5: re-selecting the pending card changes nothing.
#[test]
fn double_activation_is_idempotent() {
    let (mut deck, mut sb, mut engine) = fresh(1);

    let first = engine.select(&mut deck, &mut sb, 7);
    assert!(matches!(first, SelectOutcome::FirstRevealed { .. }));

    // Pointer and keyboard both firing on the same card.
    for _ in 0..5 {
        assert_eq!(engine.select(&mut deck, &mut sb, 7), SelectOutcome::Ignored);
    }

    assert_eq!(engine.phase(), Phase::AwaitingSecond);
    assert_eq!(engine.pending(), Some(7));
    assert_eq!(sb.moves(), 0);
}

/// P6: `Won` accepts no selection; only reset leaves it.
#[test]
fn won_is_terminal_until_reset() {
    let (mut deck, mut sb, mut engine) = fresh(4);

    for id in 0..16u8 {
        if deck.card(id).unwrap().matched {
            continue;
        }
        let partner = partner_of(&deck, id);
        engine.select(&mut deck, &mut sb, id);
        engine.select(&mut deck, &mut sb, partner);
    }
    assert_eq!(engine.phase(), Phase::Won);

    for id in 0..16u8 {
        assert_eq!(engine.select(&mut deck, &mut sb, id), SelectOutcome::Ignored);
    }
    assert_eq!(sb.moves(), 8);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.matched_pairs(), 0);
}

#[test]
fn unknown_ids_are_ignored_defensively() {
    let (mut deck, mut sb, mut engine) = fresh(1);

    for id in [16u8, 17, 100, 255] {
        assert_eq!(engine.select(&mut deck, &mut sb, id), SelectOutcome::Ignored);
    }

    // A real selection still works afterwards.
    assert!(matches!(
        engine.select(&mut deck, &mut sb, 0),
        SelectOutcome::FirstRevealed { .. }
    ));
}

#[test]
fn clock_start_edge_fires_exactly_once_per_session() {
    let (mut deck, mut sb, mut engine) = fresh(1);
    let stranger = stranger_of(&deck, 0);

    let mut starts = 0;
    for _ in 0..3 {
        if let SelectOutcome::FirstRevealed { clock_started: true, .. } =
            engine.select(&mut deck, &mut sb, 0)
        {
            starts += 1;
        }
        engine.select(&mut deck, &mut sb, stranger);
    }
    assert_eq!(starts, 1);

    // After reset the next session gets its own start edge.
    engine.reset();
    assert!(matches!(
        engine.select(&mut deck, &mut sb, 0),
        SelectOutcome::FirstRevealed { clock_started: true, .. }
    ));
}
