//! Pure tic-tac-toe game logic.
//!
//! Two players alternate on a 3x3 board, X first. The [`Game`] engine applies
//! moves, flips the player to move, and caches the outcome derived by
//! [`rules::evaluate_winner`]. Illegal moves are ignored rather than reported
//! as failures; [`Game::try_move`] is available when the reason matters.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.attempt_move(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.outcome().as_deref(), Some("Winner: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
