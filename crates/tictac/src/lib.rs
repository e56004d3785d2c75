//! tictac - two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: [`tictac_engine`] owns the rules and the game state
//! - **TUI**: click-to-play rendering layer over one [`Game`](tictac_engine::Game)
//! - **Replay**: headless move-list runner for scripts and tests
//! - **Config**: TOML settings for the TUI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
pub use replay::{MoveParseError, ReplayReport, parse_move, replay};
