use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;

use goban::{Game, GoGame, Move};

/// Play a batch of seeded random placements to create a realistic mid-game
/// position. The fixed seed keeps runs comparable.
fn setup_midgame(side: usize, players: u8) -> Game {
    let mut game = Game::new(side, players, true);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..(side * side / 4) {
        let moves = game.available_moves();
        match moves.choose(&mut rng) {
            Some(&pos) => {
                if game.apply_move(pos).is_err() {
                    break;
                }
            }
            None => break,
        }
    }

    game
}

fn bench_available_moves_9x9(c: &mut Criterion) {
    let game = setup_midgame(9, 2);
    c.bench_function("available_moves_9x9", |b| {
        b.iter(|| black_box(game.available_moves()))
    });
}

fn bench_available_moves_19x19(c: &mut Criterion) {
    let game = setup_midgame(19, 2);
    c.bench_function("available_moves_19x19", |b| {
        b.iter(|| black_box(game.available_moves()))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let game = setup_midgame(9, 2);
    let pos = game.available_moves()[0];
    c.bench_function("apply_move", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| {
                black_box(g.apply_move(pos)).ok();
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_simulate_move(c: &mut Criterion) {
    let game = setup_midgame(9, 2);
    let pos = game.available_moves()[0];
    c.bench_function("simulate_move", |b| {
        b.iter(|| black_box(game.simulate_move(Move::Place(pos))))
    });
}

fn bench_scores(c: &mut Criterion) {
    let game = setup_midgame(9, 2);
    c.bench_function("scores", |b| b.iter(|| black_box(game.scores())));
}

fn bench_scores_three_players(c: &mut Criterion) {
    let game = setup_midgame(13, 3);
    c.bench_function("scores_three_players", |b| {
        b.iter(|| black_box(game.scores()))
    });
}

fn bench_random_playout_9x9(c: &mut Criterion) {
    c.bench_function("random_playout_9x9", |b| {
        b.iter(|| {
            let mut game = Game::new(9, 2, true);
            let mut rng = StdRng::seed_from_u64(123);
            let mut plies = 0;
            while !game.done() && plies < 9 * 9 * 3 {
                let moves = game.available_moves();
                match moves.choose(&mut rng) {
                    Some(&pos) => {
                        if game.apply_move(pos).is_err() {
                            break;
                        }
                    }
                    None => game.pass_turn(),
                }
                plies += 1;
            }
            black_box(game.scores())
        })
    });
}

criterion_group!(
    benches,
    bench_available_moves_9x9,
    bench_available_moves_19x19,
    bench_apply_move,
    bench_simulate_move,
    bench_scores,
    bench_scores_three_players,
    bench_random_playout_9x9,
);
criterion_main!(benches);
