use std::collections::BTreeMap;
use std::fmt;

use crate::api::GoGame;
use crate::board::{Board, BoardGrid, STANDARD_SIDE};
use crate::error::GoError;
use crate::group::Group;
use crate::history::History;
use crate::player::PlayerId;
use crate::position::Position;
use crate::r#move::Move;
use crate::score::area_scores;

/// Places a stone for `player` at `pos`, then removes every adjacent
/// opponent group left without liberties. A single placement can capture
/// several disjoint groups; a group already removed through one neighbor
/// reads as empty when reached through another.
fn place_and_capture(board: &mut Board, pos: Position, player: PlayerId) {
    board.set(pos, Some(player));

    for neighbor in board.neighbors(pos) {
        match board.get(neighbor) {
            Some(owner) if owner != player => {
                let group = Group::at(board, neighbor, owner);
                if !group.has_liberties() {
                    for stone in &group.stones {
                        board.set(*stone, None);
                    }
                }
            }
            _ => {}
        }
    }
}

/// The production Go engine: board, turn order, pass counting, capture
/// resolution, ko enforcement, and area scoring for `1..=players` players
/// on a side×side board.
///
/// Each instance is fully self-contained; two instances (or an instance and
/// a simulated descendant) never share storage.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    players: u8,
    turn: PlayerId,
    consecutive_passes: u8,
    history: History,
}

impl Game {
    /// A fresh game on an empty side×side board. `superko` selects
    /// positional superko instead of simple ko. Both `side` and `players`
    /// must be at least 1.
    pub fn new(side: usize, players: u8, superko: bool) -> Self {
        debug_assert!(side >= 1, "board side must be at least 1");
        debug_assert!(players >= 1, "player count must be at least 1");

        let board = Board::new(side);
        let history = History::new(superko, board.fingerprint());
        Game {
            board,
            players,
            turn: PlayerId::first(),
            consecutive_passes: 0,
            history,
        }
    }

    /// Whether positional superko is in effect (otherwise simple ko).
    pub fn superko(&self) -> bool {
        self.history.superko()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    #[cfg(feature = "serde")]
    pub(crate) fn restore_consecutive_passes(&mut self, passes: u8) {
        self.consecutive_passes = passes.min(self.players);
    }

    fn next_board(&self, pos: Position) -> Board {
        let mut board = self.board.clone();
        place_and_capture(&mut board, pos, self.turn);
        board
    }

    fn is_legal_placement(&self, pos: Position) -> bool {
        if self.done() || self.board.get(pos).is_some() {
            return false;
        }

        let next = self.next_board(pos);
        let placed = Group::at(&next, pos, self.turn);
        if !placed.has_liberties() {
            return false;
        }

        !self.history.forbidden(next.fingerprint())
    }

    /// The placement transition, with no legality validation. Placement,
    /// captures, history append, and turn advance are one atomic step.
    /// Ignored once the game is done.
    fn apply_placement(&mut self, pos: Position) {
        if self.done() {
            return;
        }

        place_and_capture(&mut self.board, pos, self.turn);
        self.history.record(self.board.fingerprint());
        self.consecutive_passes = 0;
        self.turn = self.turn.next(self.players);
    }
}

impl GoGame for Game {
    fn size(&self) -> usize {
        self.board.side()
    }

    fn num_players(&self) -> u8 {
        self.players
    }

    fn grid(&self) -> BoardGrid {
        self.board.grid()
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn available_moves(&self) -> Vec<Position> {
        if self.done() {
            return Vec::new();
        }

        self.board
            .positions()
            .filter(|pos| self.is_legal_placement(*pos))
            .collect()
    }

    fn done(&self) -> bool {
        self.consecutive_passes >= self.players
    }

    fn outcome(&self) -> Vec<PlayerId> {
        if !self.done() {
            return Vec::new();
        }

        let scores = self.scores();
        let best = scores.values().copied().max().unwrap_or(0);
        scores
            .into_iter()
            .filter(|(_, score)| *score == best)
            .map(|(player, _)| player)
            .collect()
    }

    fn piece_at(&self, pos: Position) -> Result<Option<PlayerId>, GoError> {
        self.board.piece_at(pos)
    }

    fn legal_move(&self, pos: Position) -> Result<bool, GoError> {
        self.board.check_bounds(pos)?;
        Ok(self.is_legal_placement(pos))
    }

    fn apply_move(&mut self, pos: Position) -> Result<(), GoError> {
        self.board.check_bounds(pos)?;
        debug_assert!(
            self.is_legal_placement(pos),
            "apply_move precondition violated: {} is not a legal move",
            pos
        );
        self.apply_placement(pos);
        Ok(())
    }

    fn pass_turn(&mut self) {
        if self.done() {
            return;
        }

        self.consecutive_passes += 1;
        self.history.record(self.board.fingerprint());
        self.turn = self.turn.next(self.players);
    }

    fn scores(&self) -> BTreeMap<PlayerId, usize> {
        area_scores(&self.board, self.players)
    }

    fn load_game(&mut self, turn: PlayerId, grid: &[Vec<Option<PlayerId>>]) -> Result<(), GoError> {
        if turn.get() > self.players {
            return Err(GoError::InvalidArgument(format!(
                "turn {} is outside 1..={}",
                turn, self.players
            )));
        }

        let board = Board::from_grid(self.board.side(), self.players, grid)?;
        self.history.reset(board.fingerprint());
        self.board = board;
        self.turn = turn;
        self.consecutive_passes = 0;
        Ok(())
    }

    fn simulate_move(&self, mv: Move) -> Result<Self, GoError> {
        if let Move::Place(pos) = mv {
            self.board.check_bounds(pos)?;
        }

        let mut copy = self.clone();
        match mv {
            Move::Place(pos) => copy.apply_placement(pos),
            Move::Pass => copy.pass_turn(),
        }
        Ok(copy)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(STANDARD_SIDE, 2, false)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Game(turn: {}, passes: {}, done: {})",
            self.turn,
            self.consecutive_passes,
            self.done()
        )?;
        write!(f, "{}", self.board)
    }
}
