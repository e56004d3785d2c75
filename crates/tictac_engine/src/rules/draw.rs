//! Tie detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no completed line is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{GameStatus, Player, Position};
    use super::super::win::evaluate_winner;
    use super::*;

    fn board_from(rows: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(rows.chars().filter(|c| *c != '/')) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let board = board_from("XOX/XOO/OXX");
        assert!(is_full(&board));
        assert_eq!(evaluate_winner(&board), GameStatus::Tie);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        let board = board_from("XOX/XO./OX.");
        assert!(!is_full(&board));
        assert_eq!(evaluate_winner(&board), GameStatus::InProgress);
    }
}
