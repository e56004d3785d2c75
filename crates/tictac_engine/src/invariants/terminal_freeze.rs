//! Terminal freeze invariant: nothing is played after the game ends.

use super::super::rules::evaluate_winner;
use super::super::{Board, Game, GameStatus, Square};
use super::Invariant;

/// Invariant: The cached status matches the board, and replaying the history
/// reaches a terminal state at the last move or not at all.
pub struct TerminalFreezeInvariant;

impl Invariant<Game> for TerminalFreezeInvariant {
    fn holds(game: &Game) -> bool {
        let mut board = Board::new();
        let mut status = GameStatus::InProgress;

        for mov in game.history() {
            if status.is_over() {
                return false;
            }
            board.set(mov.position(), Square::Occupied(mov.player()));
            status = evaluate_winner(&board);
        }

        status == game.status()
    }

    fn description() -> &'static str {
        "No move is played after the game has ended"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut game = Game::new();
        game.play_all(&[0, 3, 1, 4, 2]);
        assert!(game.is_over());
        assert!(TerminalFreezeInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = Game::new();
        game.play_all(&[0, 3, 1, 4, 2]);
        game.history.push(Move::new(Player::O, Position::MiddleRight));
        game.board.set(Position::MiddleRight, Square::Occupied(Player::O));
        assert!(!TerminalFreezeInvariant::holds(&game));
    }
}
