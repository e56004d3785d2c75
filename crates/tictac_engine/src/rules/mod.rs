//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the game engine so the board can be evaluated from scratch at any time.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, evaluate_winner, winning_line};
