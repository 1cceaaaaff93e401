use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::player::PlayerId;
use crate::position::Position;

/// Area scores for every player in `1..=players`: stones on the board plus
/// enclosed territory. An empty region counts for a player iff that player
/// is the only one with a stone adjacent to the region; regions touching
/// zero or several players score for no one.
///
/// Every player id appears in the result, zero scores included.
pub fn area_scores(board: &Board, players: u8) -> BTreeMap<PlayerId, usize> {
    let mut scores: BTreeMap<PlayerId, usize> = (1..=players)
        .filter_map(PlayerId::from_int)
        .map(|player| (player, 0))
        .collect();

    for pos in board.positions() {
        if let Some(owner) = board.get(pos) {
            *scores.entry(owner).or_insert(0) += 1;
        }
    }

    let mut visited: FxHashSet<Position> = FxHashSet::default();
    for pos in board.positions() {
        if board.get(pos).is_some() || visited.contains(&pos) {
            continue;
        }

        let (size, owners) = empty_region(board, pos, &mut visited);
        if owners.len() == 1 {
            if let Some(owner) = owners.into_iter().next() {
                *scores.entry(owner).or_insert(0) += size;
            }
        }
    }

    scores
}

/// Flood fill of the maximal empty region containing `start`, returning its
/// size and the set of distinct players bordering it. `start` must be empty
/// and unvisited; visited cells are shared across regions so each empty
/// intersection is examined once.
fn empty_region(
    board: &Board,
    start: Position,
    visited: &mut FxHashSet<Position>,
) -> (usize, FxHashSet<PlayerId>) {
    let mut size = 0;
    let mut owners = FxHashSet::default();
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if !visited.insert(pos) {
            continue;
        }
        size += 1;

        for neighbor in board.neighbors(pos) {
            match board.get(neighbor) {
                Some(owner) => {
                    owners.insert(owner);
                }
                None => {
                    if !visited.contains(&neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
        }
    }

    (size, owners)
}
