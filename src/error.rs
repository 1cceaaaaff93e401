use thiserror::Error;

use crate::position::Position;

/// Errors surfaced by the game interface. Everything else is a total
/// function over well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoError {
    #[error("position {pos} is outside the {side}x{side} board")]
    OutOfBounds { pos: Position, side: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
