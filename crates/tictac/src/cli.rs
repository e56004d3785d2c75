//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe with a click-to-play terminal UI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI (mouse or keyboard)
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictac.toml")]
        config: PathBuf,
    },

    /// Apply a list of moves without the UI and print the result
    Replay {
        /// Comma-separated moves, as board indices (0-8) or cell labels
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("tictac.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_replay_splits_moves() {
        let cli = Cli::try_parse_from(["tictac", "replay", "0,4,center", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".into(), "4".into(), "center".into()],
                json: true,
            })
        );
    }

    #[test]
    fn test_play_accepts_config_path() {
        let cli = Cli::try_parse_from(["tictac", "play", "--config", "other.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                config: PathBuf::from("other.toml"),
            })
        );
    }
}
