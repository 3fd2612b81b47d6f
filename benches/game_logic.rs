use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_match::core::{Deck, MatchEngine, Scoreboard};
use tui_match::types::CardId;

fn partner_of(deck: &Deck, id: CardId) -> CardId {
    let token = deck.card(id).unwrap().token;
    deck.cards()
        .iter()
        .find(|c| c.token == token && c.id != id)
        .unwrap()
        .id
}

fn bench_deal(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    c.bench_function("deal_shuffled_deck", |b| {
        b.iter(|| {
            let deck = Deck::deal(black_box(&mut rng));
            black_box(deck);
        })
    });
}

fn bench_perfect_game(c: &mut Criterion) {
    c.bench_function("perfect_game", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(12345);
            let mut deck = Deck::deal(&mut rng);
            let mut scoreboard = Scoreboard::new();
            let mut engine = MatchEngine::new();

            for id in 0..16u8 {
                if deck.card(id).unwrap().matched {
                    continue;
                }
                let partner = partner_of(&deck, id);
                engine.select(&mut deck, &mut scoreboard, id);
                engine.select(&mut deck, &mut scoreboard, partner);
            }
            black_box(scoreboard.moves());
        })
    });
}

fn bench_mismatch_heavy_game(c: &mut Criterion) {
    c.bench_function("mismatch_heavy_game", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(12345);
            let mut deck = Deck::deal(&mut rng);
            let mut scoreboard = Scoreboard::new();
            let mut engine = MatchEngine::new();

            // Grind through every off-token pairing before finishing.
            for id in 0..16u8 {
                let token = deck.card(id).unwrap().token;
                for other in (id + 1)..16u8 {
                    if deck.card(other).unwrap().token != token {
                        engine.select(&mut deck, &mut scoreboard, id);
                        engine.select(&mut deck, &mut scoreboard, other);
                    }
                }
            }
            for id in 0..16u8 {
                if deck.card(id).unwrap().matched {
                    continue;
                }
                let partner = partner_of(&deck, id);
                engine.select(&mut deck, &mut scoreboard, id);
                engine.select(&mut deck, &mut scoreboard, partner);
            }
            black_box(scoreboard.incorrect_moves());
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_perfect_game,
    bench_mismatch_heavy_game
);
criterion_main!(benches);
