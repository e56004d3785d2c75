//! Tic-tac-toe game engine.
//!
//! A [`Game`] owns the board, the player to move, and the cached outcome.
//! Moves are applied through [`Game::attempt_move`], which ignores illegal
//! input instead of failing: an out-of-range index, an occupied square, or a
//! move after the game has ended leaves the state untouched.
//!
//! There is no reset. A fresh game is a fresh `Game`.

use super::action::{Move, MoveError};
use super::rules::evaluate_winner;
use super::types::{Board, GameStatus, Player, Square};
use super::Position;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who moves next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once a player has won or the board is tied.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome text for display: `None` while in progress,
    /// `"It's a Tie!"` or `"Winner: X"` once the game has ended.
    pub fn outcome(&self) -> Option<String> {
        self.status.message()
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Returns whether the move was applied. Illegal moves are no-ops.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, index: usize) -> bool {
        match self.try_move(index) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Plays the current player's mark at `index`, reporting why a move was
    /// rejected. A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.current_player = player.opponent();
        self.update_status();

        info!(position = %pos, status = ?self.status, "Move applied");

        #[cfg(debug_assertions)]
        {
            use super::invariants::{InvariantSet, TicTacToeInvariants};
            debug_assert!(
                TicTacToeInvariants::check_all(&*self).is_ok(),
                "invariant violated after move at {pos}"
            );
        }

        Ok(())
    }

    /// Re-evaluates the board, never overwriting a decided outcome.
    fn update_status(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.status = evaluate_winner(&self.board);
        if let Some(message) = self.status.message() {
            info!(%message, moves = self.history.len(), "Game over");
        }
    }

    /// Plays `indices` in order through [`Game::attempt_move`].
    ///
    /// Returns the number of moves that were applied.
    #[instrument(skip(self))]
    pub fn play_all(&mut self, indices: &[usize]) -> usize {
        indices
            .iter()
            .filter(|&&index| self.attempt_move(index))
            .count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
