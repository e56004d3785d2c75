//! Walks every reachable game and checks the engine's guarantees at each step.

use tictac_engine::invariants::{InvariantSet, TicTacToeInvariants};
use tictac_engine::rules::evaluate_winner;
use tictac_engine::{Game, GameStatus, Player, Position};

#[derive(Default)]
struct Tally {
    games: usize,
    x_wins: usize,
    o_wins: usize,
    ties: usize,
}

fn walk(game: &Game, tally: &mut Tally) {
    assert!(TicTacToeInvariants::check_all(game).is_ok());
    assert_eq!(game.status(), evaluate_winner(game.board()));

    if game.is_over() {
        tally.games += 1;
        match game.status() {
            GameStatus::Won(Player::X) => tally.x_wins += 1,
            GameStatus::Won(Player::O) => tally.o_wins += 1,
            GameStatus::Tie => tally.ties += 1,
            GameStatus::InProgress => unreachable!(),
        }

        let mut frozen = game.clone();
        assert_eq!(frozen.play_all(&[0, 1, 2, 3, 4, 5, 6, 7, 8]), 0);
        assert_eq!(&frozen, game);
        return;
    }

    for pos in Position::ALL {
        let mut next = game.clone();
        let applied = next.attempt_move(pos.to_index());

        if game.board().is_empty(pos) {
            assert!(applied);
            assert_eq!(next.current_player(), game.current_player().opponent());
            assert_eq!(next.history().len(), game.history().len() + 1);
            walk(&next, tally);
        } else {
            assert!(!applied);
            assert_eq!(&next, game);
        }
    }
}

#[test]
fn test_every_reachable_game() {
    let mut tally = Tally::default();
    walk(&Game::new(), &mut tally);

    // Known totals for tic-tac-toe game trees.
    assert_eq!(tally.games, 255_168);
    assert_eq!(tally.x_wins, 131_184);
    assert_eq!(tally.o_wins, 77_904);
    assert_eq!(tally.ties, 46_080);
}
