//! tictac - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tictac::{Cli, Command, TuiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(&config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path) -> Result<()> {
    let config = TuiConfig::load_or_default(config_path)?;
    tictac::tui::run_tui(&config)
}

/// Replay moves headlessly and print the result
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Replaying moves");
    let report = tictac::replay(moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
