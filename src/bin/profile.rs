//! Seeded random self-play driver for profiling the engine's hot paths.
//!
//! Plays a batch of random games to completion (or a ply cap) and reports
//! throughput and final scores of the last game.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use goban::{Game, GoGame};

const SIDE: usize = 9;
const PLAYERS: u8 = 2;
const GAMES: usize = 20;

fn play_one(rng: &mut StdRng) -> (Game, usize) {
    let mut game = Game::new(SIDE, PLAYERS, true);
    let cap = SIDE * SIDE * 3;
    let mut plies = 0;

    while !game.done() && plies < cap {
        let moves = game.available_moves();
        match moves.choose(rng) {
            Some(&pos) => {
                if game.apply_move(pos).is_err() {
                    break;
                }
            }
            None => game.pass_turn(),
        }
        plies += 1;
    }

    (game, plies)
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let start = Instant::now();
    let mut total_plies = 0;
    let mut last = None;

    for _ in 0..GAMES {
        let (game, plies) = play_one(&mut rng);
        total_plies += plies;
        last = Some(game);
    }

    let elapsed = start.elapsed();
    println!(
        "{} games, {} plies in {:.2?} ({:.0} plies/s)",
        GAMES,
        total_plies,
        elapsed,
        total_plies as f64 / elapsed.as_secs_f64()
    );

    if let Some(game) = last {
        println!("last game (done: {}):", game.done());
        for (player, score) in game.scores() {
            println!("  player {}: {}", player, score);
        }
        println!("{}", game);
    }
}
