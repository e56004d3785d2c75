//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Board, Game, Square};
use super::Invariant;

/// Invariant: Replaying the move history onto an empty board reproduces the
/// current board, and no move ever landed on an occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position()) {
                return false;
            }
            reconstructed.set(mov.position(), Square::Occupied(mov.player()));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches move history (squares never overwritten)"
    }
}
