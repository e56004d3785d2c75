//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// The player to move is always the opponent of the last mover,
/// including after the game-ending move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player() != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player() == w[1].player()) {
            return false;
        }

        let expected_next = match history.last() {
            Some(last) => last.player().opponent(),
            None => Player::X,
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new();
        game.play_all(&[0, 4, 2, 6, 8]);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = Game::new();
        game.attempt_move(4);
        game.current_player = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
