//! Rules engine for the board game Go, generalized to an arbitrary board
//! side, an arbitrary number of players, and a configurable ko rule
//! (simple ko or positional superko).
//!
//! The [`GoGame`] trait is the contract consumers program against;
//! [`Game`] is the production engine behind it: capture resolution via
//! group/liberty analysis, repetition history for ko enforcement, area
//! scoring, and pure move simulation over independent copies.
//!
//! ```
//! use goban::{Game, GoGame, Position};
//!
//! let mut game = Game::new(9, 2, false);
//! assert!(game.legal_move(Position::new(4, 4)).unwrap());
//! game.apply_move(Position::new(4, 4)).unwrap();
//! assert_eq!(game.turn().get(), 2);
//! ```

pub mod api;
pub mod board;
pub mod error;
pub mod game;
pub mod group;
pub mod history;
pub mod r#move;
pub mod player;
pub mod position;
pub mod score;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use api::GoGame;
pub use board::{Board, BoardGrid, STANDARD_SIDE};
pub use error::GoError;
pub use game::Game;
pub use group::Group;
pub use player::PlayerId;
pub use position::Position;
pub use r#move::Move;
