//! Application state and input handling.

use super::input::move_cursor;
use super::ui::{CellRects, cell_at};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictac_engine::{Game, Position};
use tracing::{debug, info, instrument};

/// Main application state: one game plus what the UI needs to drive it.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    cells: CellRects,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            cells: CellRects::default(),
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the cells were drawn, for mouse hit-testing.
    pub fn set_cells(&mut self, cells: CellRects) {
        self.cells = cells;
    }

    /// Plays at `pos`. Cells accept no input once the game is over.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> bool {
        if self.game.is_over() {
            debug!("Board is locked, ignoring input");
            return false;
        }
        self.cursor = pos;
        self.game.attempt_move(pos.to_index())
    }

    /// Starts over with a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r' | 'R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
            }
            KeyCode::Char(c) => {
                let pos = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index);
                if let Some(pos) = pos {
                    self.play(pos);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event. A left click on a cell plays it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
            && let Some(pos) = cell_at(&self.cells, mouse.column, mouse.row)
        {
            self.play(pos);
        }
    }
}
