//! Terminal restoration on every exit path.

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io::Write;
use tracing::{debug, warn};

/// Restores the terminal when dropped: leaves the alternate screen, stops
/// mouse capture, shows the cursor, and turns raw mode off.
///
/// Created right after raw mode is enabled, so an early `?` or a panic in the
/// game loop still hands the user back a usable terminal.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Guards a terminal whose raw mode is already on.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to reset terminal screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    #[test]
    fn test_drop_writes_restore_sequences() {
        let mut out = Vec::new();
        drop(TerminalGuard::new(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_restores_when_loop_panics() {
        let mut out = Vec::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard::new(&mut out);
            panic!("game loop failed");
        }));

        assert!(result.is_err());
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
    }
}
