//! Mark balance invariant: X has as many marks as O, or one more.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or O count + 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_balance_holds_through_a_game() {
        let mut game = Game::new();
        for index in [0, 4, 8, 2, 6, 3] {
            game.attempt_move(index);
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut game = Game::new();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
