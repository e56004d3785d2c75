//! Terminal UI: the click-to-play rendering layer over the game engine.

mod app;
mod guard;
mod input;
mod ui;

pub use app::App;
pub use guard::TerminalGuard;
pub use input::move_cursor;
pub use ui::{CellRects, cell_at, draw, layout_cells};

use crate::config::TuiConfig;
use anyhow::Result;
use crossterm::{
    event::{self, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the TUI until the user quits.
///
/// Tracing goes to the configured log file so it does not interfere with the
/// display.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_tracing(config)?;

    info!("Starting tictac TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(io::stdout());

    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.show_cell_numbers());
    let res = run_app(&mut terminal, app);

    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("TUI exited");
    res
}

/// Draw, wait for one event, apply it. One event at a time, no background work.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut cells = CellRects::default();
        terminal.draw(|f| cells = draw(f, &app))?;
        app.set_cells(cells);

        app.handle_event(event::read()?);

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn init_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
