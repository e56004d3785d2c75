//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Player, Position};
use super::draw::is_full;
use tracing::instrument;

/// The eight winning triples in scan order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Mark held by all three squares of `line`, if any.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let owner = board.get(a).player()?;
    (board.get(b).player() == Some(owner) && board.get(c).player() == Some(owner)).then_some(owner)
}

/// Returns the last completed line in scan order, with its owner.
///
/// Every line is scanned; when several are complete the later one wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<([Position; 3], Player)> {
    LINES
        .iter()
        .filter_map(|&line| line_owner(board, line).map(|owner| (line, owner)))
        .last()
}

/// Evaluates the board from scratch.
///
/// A completed line wins even on a full board. A full board with no
/// completed line is a tie; anything else is still in progress.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> GameStatus {
    match winning_line(board) {
        Some((_, owner)) => GameStatus::Won(owner),
        None if is_full(board) => GameStatus::Tie,
        None => GameStatus::InProgress,
    }
}
