use std::collections::BTreeMap;

use crate::board::BoardGrid;
use crate::error::GoError;
use crate::player::PlayerId;
use crate::position::Position;
use crate::r#move::Move;

/// The call surface every Go engine exposes to its consumers (UIs, bots,
/// judging harnesses). [`crate::game::Game`] is the production
/// implementation; test doubles implement the same trait.
///
/// Positions are `(row, col)`, 0-indexed. Players are numbered from 1 and
/// move in cyclic order.
pub trait GoGame: Sized {
    /// The number of intersections per side of the board.
    fn size(&self) -> usize;

    /// The number of players.
    fn num_players(&self) -> u8;

    /// A full snapshot of the board. The returned grid is an independent
    /// copy: mutating it never affects the game.
    fn grid(&self) -> BoardGrid;

    /// The player who must make the next move. Not meaningful once the
    /// game is done.
    fn turn(&self) -> PlayerId;

    /// Every position where the current player could legally place a
    /// stone. Empty once the game is done.
    fn available_moves(&self) -> Vec<Position>;

    /// Whether the game is over (every player passed consecutively).
    fn done(&self) -> bool;

    /// The winners: empty while the game is running; once done, all
    /// players tied at the maximum score, in ascending order.
    fn outcome(&self) -> Vec<PlayerId>;

    /// The piece at `pos`, or `None` for an empty intersection.
    ///
    /// # Errors
    ///
    /// [`GoError::OutOfBounds`] if `pos` is off the board.
    fn piece_at(&self, pos: Position) -> Result<Option<PlayerId>, GoError>;

    /// Whether the current player may place a stone at `pos`: the
    /// intersection must be empty, the placement must not be suicide after
    /// captures resolve, and the resulting board must not violate the
    /// active ko rule. Always false once the game is done.
    ///
    /// # Errors
    ///
    /// [`GoError::OutOfBounds`] if `pos` is off the board.
    fn legal_move(&self, pos: Position) -> Result<bool, GoError>;

    /// Places a stone for the current player at `pos`, captures any
    /// opponent groups left without liberties, and advances the turn.
    ///
    /// `pos` is assumed to be legal (as reported by [`Self::legal_move`]
    /// or [`Self::available_moves`]). Calling this with an on-board but
    /// illegal position is a contract violation: debug builds assert,
    /// release builds apply the same deterministic place-and-capture
    /// transition without validating legality.
    ///
    /// # Errors
    ///
    /// [`GoError::OutOfBounds`] if `pos` is off the board.
    fn apply_move(&mut self, pos: Position) -> Result<(), GoError>;

    /// The current player passes. Once every player has passed
    /// back-to-back with no placement in between, the game is done; a
    /// pass on a finished game does nothing.
    fn pass_turn(&mut self);

    /// The current area score for every player: stones on the board plus
    /// empty territory bordering only that player. Every player id in
    /// `1..=num_players` is present, zeros included.
    fn scores(&self) -> BTreeMap<PlayerId, usize>;

    /// Replaces the board and turn wholesale, resetting the pass streak.
    ///
    /// The repetition history restarts from the loaded position, so ko
    /// violations against boards reached before the load are no longer
    /// detected.
    ///
    /// # Errors
    ///
    /// [`GoError::InvalidArgument`] if `turn` exceeds the player count, if
    /// the grid is not size×size, or if any stone's owner exceeds the
    /// player count. The prior state is left untouched on error.
    fn load_game(&mut self, turn: PlayerId, grid: &[Vec<Option<PlayerId>>]) -> Result<(), GoError>;

    /// Applies a move to an independent copy of the game and returns the
    /// copy; the receiver is never modified. Simulations chain: simulating
    /// on a simulated game composes moves without touching any ancestor.
    ///
    /// A placement is only bounds-checked, not legality-checked, so the
    /// result can be inspected for rule violations (e.g. comparing grids
    /// for ko); simulating an illegal placement follows the same
    /// deterministic transition documented on [`Self::apply_move`].
    ///
    /// # Errors
    ///
    /// [`GoError::OutOfBounds`] if the move places off the board.
    fn simulate_move(&self, mv: Move) -> Result<Self, GoError>;
}
