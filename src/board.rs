use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::error::GoError;
use crate::player::PlayerId;
use crate::position::Position;

pub const STANDARD_SIDE: usize = 19;

/// Exchange type for board snapshots: a matrix of rows, each cell either
/// empty or owned by a player.
pub type BoardGrid = Vec<Vec<Option<PlayerId>>>;

/// A side×side grid of intersections. Owned exclusively by one game; all
/// outward-facing views are independent copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    pub fn new(side: usize) -> Self {
        Board {
            side,
            cells: vec![None; side * side],
        }
    }

    /// Builds a board from a full grid, validating shape and owners.
    /// Rejects grids that are not side×side and stones owned by ids
    /// outside `1..=players`.
    pub fn from_grid(side: usize, players: u8, grid: &[Vec<Option<PlayerId>>]) -> Result<Self, GoError> {
        if grid.len() != side {
            return Err(GoError::InvalidArgument(format!(
                "grid has {} rows, expected {}",
                grid.len(),
                side
            )));
        }

        let mut cells = Vec::with_capacity(side * side);
        for (row, cols) in grid.iter().enumerate() {
            if cols.len() != side {
                return Err(GoError::InvalidArgument(format!(
                    "grid row {} has {} columns, expected {}",
                    row,
                    cols.len(),
                    side
                )));
            }

            for (col, cell) in cols.iter().enumerate() {
                if let Some(owner) = cell {
                    if owner.get() > players {
                        return Err(GoError::InvalidArgument(format!(
                            "stone at ({}, {}) is owned by player {}, but the game has {} players",
                            row, col, owner, players
                        )));
                    }
                }
                cells.push(*cell);
            }
        }

        Ok(Board { side, cells })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn check_bounds(&self, pos: Position) -> Result<(), GoError> {
        if pos.is_valid(self.side) {
            Ok(())
        } else {
            Err(GoError::OutOfBounds {
                pos,
                side: self.side,
            })
        }
    }

    /// The piece at `pos`, or an error if `pos` is off the board.
    pub fn piece_at(&self, pos: Position) -> Result<Option<PlayerId>, GoError> {
        self.check_bounds(pos)?;
        Ok(self.get(pos))
    }

    /// Unchecked accessor for positions already known to be on the board.
    pub(crate) fn get(&self, pos: Position) -> Option<PlayerId> {
        debug_assert!(pos.is_valid(self.side));
        self.cells[pos.to_index(self.side)]
    }

    pub(crate) fn set(&mut self, pos: Position, piece: Option<PlayerId>) {
        debug_assert!(pos.is_valid(self.side));
        let index = pos.to_index(self.side);
        self.cells[index] = piece;
    }

    /// A full snapshot with value semantics: mutating the returned grid
    /// never affects this board.
    pub fn grid(&self) -> BoardGrid {
        (0..self.side)
            .map(|row| (0..self.side).map(|col| self.get(Position::new(row, col))).collect())
            .collect()
    }

    /// Canonical content fingerprint. Two boards fingerprint equal iff their
    /// grids are equal, independent of whose turn it is.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Every position on the board, row-major.
    pub(crate) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.side * self.side).map(|index| Position::from_index(index, self.side))
    }

    /// The up-to-4 orthogonal neighbors of `pos` that are on the board.
    pub(crate) fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        let mut neighbors = SmallVec::new();

        if pos.row > 0 {
            neighbors.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.side {
            neighbors.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            neighbors.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.side {
            neighbors.push(Position::new(pos.row, pos.col + 1));
        }

        neighbors
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            write!(f, "|")?;
            for col in 0..self.side {
                let c = match self.get(Position::new(row, col)) {
                    Some(player) => player.to_char(),
                    None => '.',
                };
                write!(f, "{}|", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
