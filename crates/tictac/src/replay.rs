//! Headless replay of a move list.

use derive_more::{Display, Error};
use serde::Serialize;
use tictac_engine::{Game, Position};
use tracing::{info, instrument};

/// A move token that is neither a number nor a cell label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized move '{}' (expected 0-8 or a cell label like 'center')", token)]
pub struct MoveParseError {
    /// The offending token.
    pub token: String,
}

/// Parses a move token into a board index.
///
/// Numbers pass through unchecked so the engine decides what an out-of-range
/// index means. Digit strings too long for `usize` become `usize::MAX`.
pub fn parse_move(token: &str) -> Result<usize, MoveParseError> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(token.parse::<usize>().unwrap_or(usize::MAX));
    }
    Position::from_label_or_number(token)
        .map(Position::to_index)
        .ok_or_else(|| MoveParseError {
            token: token.to_string(),
        })
}

/// Result of replaying a move list.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Final game state.
    pub game: Game,
    /// Number of moves that were applied.
    pub applied: usize,
    /// Number of moves that were ignored.
    pub ignored: usize,
}

impl ReplayReport {
    /// Plain-text summary: board, applied moves, player to move, and outcome.
    pub fn render(&self) -> String {
        let mut out = self.game.board().display();
        if !self.game.history().is_empty() {
            out.push('\n');
        }
        for (n, mov) in self.game.history().iter().enumerate() {
            out.push_str(&format!("\n{}. {}", n + 1, mov));
        }
        out.push_str(&format!("\n\nCurrent Player: {}", self.game.current_player()));
        if let Some(outcome) = self.game.outcome() {
            out.push('\n');
            out.push_str(&outcome);
        }
        if self.ignored > 0 {
            out.push_str(&format!("\n({} move(s) ignored)", self.ignored));
        }
        out
    }
}

/// Plays `tokens` on a fresh game.
#[instrument]
pub fn replay<S: AsRef<str> + std::fmt::Debug>(tokens: &[S]) -> Result<ReplayReport, MoveParseError> {
    let indices = tokens
        .iter()
        .map(|t| parse_move(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut game = Game::new();
    let applied = game.play_all(&indices);
    let ignored = indices.len() - applied;
    info!(applied, ignored, status = ?game.status(), "Replay finished");

    Ok(ReplayReport {
        game,
        applied,
        ignored,
    })
}
