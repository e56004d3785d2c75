//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_engine::{Player, Position, Square, rules::winning_line};

/// Screen rectangles of the nine cells, indexed like the board.
pub type CellRects = [Rect; 9];

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen and returns where the cells were drawn.
pub fn draw(frame: &mut Frame, app: &App) -> CellRects {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // Status
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app);

    let cells = layout_cells(chunks[2]);
    draw_board(frame, &cells, app);

    let help = Paragraph::new("Click a cell or press 1-9 | Arrows + Enter | R: New game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    cells
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let mut spans = vec![Span::styled(
        format!("Current Player: {}", game.current_player()),
        Style::default().fg(Color::Yellow),
    )];

    if let Some(outcome) = game.outcome() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            outcome,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

/// Lays out the 3x3 grid centered in `area`.
///
/// Cells are separated by one-cell gutters where the grid lines are drawn.
pub fn layout_cells(area: Rect) -> CellRects {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = CellRects::default();
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell;
        }
    }
    cells
}

/// Finds the cell under a terminal coordinate.
pub fn cell_at(cells: &CellRects, column: u16, row: u16) -> Option<Position> {
    cells
        .iter()
        .position(|r| {
            r.area() > 0 && column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
        .and_then(Position::from_index)
}

fn draw_board(frame: &mut Frame, cells: &CellRects, app: &App) {
    let winner = app.game().status().winner();
    let line = winning_line(app.game().board())
        .filter(|(_, owner)| Some(*owner) == winner)
        .map(|(line, _)| line);

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.to_index()], app, pos, line);
    }

    // Grid lines sit in the gutters between cells.
    let grid = Style::default().fg(Color::DarkGray);
    for row in 0..2 {
        let above = cells[row * 3];
        let y = above.bottom();
        let width = cells[row * 3 + 2].right().saturating_sub(above.x);
        let area = Rect::new(above.x, y, width, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new("─".repeat(width as usize)).style(grid), area);
    }
    for col in 0..2 {
        let left = cells[col];
        let x = left.right();
        let height = cells[6 + col].bottom().saturating_sub(left.y);
        let area = Rect::new(x, left.y, 1, height).intersection(frame.area());
        let bar: Vec<Line> = (0..height).map(|_| Line::raw("│")).collect();
        frame.render_widget(Paragraph::new(bar).style(grid), area);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    pos: Position,
    winning: Option<[Position; 3]>,
) {
    let (symbol, mut style) = match app.game().board().get(pos) {
        Square::Empty if app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => {
            let color = match player {
                Player::X => Color::Blue,
                Player::O => Color::Red,
            };
            (
                player.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };

    if winning.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() && !app.game().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::raw("")).collect();
    lines.push(Line::raw(symbol));

    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
