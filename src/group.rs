use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::player::PlayerId;
use crate::position::Position;

/// A maximal orthogonally-connected set of same-owner stones, together with
/// its liberties (the empty intersections orthogonally adjacent to any
/// member, deduplicated).
///
/// Groups are derived values, computed on demand from the current board and
/// never cached across moves.
#[derive(Clone, Debug)]
pub struct Group {
    pub stones: FxHashSet<Position>,
    pub liberties: FxHashSet<Position>,
}

impl Group {
    /// Collects the group of `owner` stones containing `start`. If `start`
    /// does not hold a stone of `owner`, the result is empty.
    pub fn at(board: &Board, start: Position, owner: PlayerId) -> Group {
        let mut stones = FxHashSet::default();
        let mut liberties = FxHashSet::default();

        if board.get(start) != Some(owner) {
            return Group { stones, liberties };
        }

        let mut stack = vec![start];
        while let Some(pos) = stack.pop() {
            if !stones.insert(pos) {
                continue;
            }

            for neighbor in board.neighbors(pos) {
                match board.get(neighbor) {
                    None => {
                        liberties.insert(neighbor);
                    }
                    Some(piece) if piece == owner => {
                        if !stones.contains(&neighbor) {
                            stack.push(neighbor);
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        Group { stones, liberties }
    }

    pub fn has_liberties(&self) -> bool {
        !self.liberties.is_empty()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}
