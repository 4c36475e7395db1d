//! Stateless rendering and board geometry.
//!
//! The board occupies a centered rect of 3x3 cells with a fixed footprint,
//! so mapping a pointer position back to a cell is plain integer division.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::game::{Cell, Game, Mark, Outcome, Square, Turn};

/// Terminal columns each board cell spans.
pub const CELL_WIDTH: u16 = 12;
/// Terminal rows each board cell spans.
pub const CELL_HEIGHT: u16 = 4;

const BOARD_WIDTH: u16 = 3 * CELL_WIDTH;
const BOARD_HEIGHT: u16 = 3 * CELL_HEIGHT;

/// Renders one frame from the game snapshot.
pub fn draw(frame: &mut Frame, game: &Game, cursor: Cell) {
    let chunks = chunk(frame.area());

    let title = Paragraph::new("Tic Tac Toe vs Computer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_rect = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    draw_board(frame, board_rect, game, cursor);

    let status = Paragraph::new(status_line(game))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if game.is_over() {
        draw_game_over(frame, board_rect, game.outcome());
    }
}

/// Where the board lands for a frame of the given size.
///
/// Pure function of the frame geometry; the event loop uses it to map
/// pointer positions through [`cell_at`].
pub fn board_area(area: Rect) -> Rect {
    center_rect(chunk(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Maps a terminal position inside the board rect to its cell.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Cell> {
    if !board.contains(Position::new(column, row)) {
        return None;
    }
    let col = (column - board.x) / CELL_WIDTH;
    let r = (row - board.y) / CELL_HEIGHT;
    Cell::new(r as usize, col as usize)
}

fn chunk(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn draw_board(frame: &mut Frame, board_rect: Rect, game: &Game, cursor: Cell) {
    for cell in Cell::ALL {
        let rect = Rect::new(
            board_rect.x + cell.col() as u16 * CELL_WIDTH,
            board_rect.y + cell.row() as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        );
        draw_cell(frame, rect, game, cursor, cell);
    }
}

fn draw_cell(frame: &mut Frame, rect: Rect, game: &Game, cursor: Cell, cell: Cell) {
    let (glyph, style) = match game.board().get(cell) {
        Square::Empty => ("", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            "X",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            "O",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let highlight = cell == cursor && !game.is_over() && game.turn() == Turn::Human;
    let border_style = if highlight {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let paragraph = Paragraph::new(vec![Line::default(), Line::styled(glyph, style)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, rect);
}

fn draw_game_over(frame: &mut Frame, board_rect: Rect, outcome: Outcome) {
    let message = match outcome {
        Outcome::HumanWin => "You Win!",
        Outcome::ComputerWin => "Computer Wins!",
        Outcome::Draw => "It's a Tie!",
        Outcome::InProgress => return,
    };

    let rect = center_rect(board_rect, BOARD_WIDTH - 4, 4);
    let text = vec![
        Line::styled(
            message,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::from("Press Space to restart"),
    ];
    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, rect);
    frame.render_widget(overlay, rect);
}

fn status_line(game: &Game) -> &'static str {
    if game.is_over() {
        "Game over"
    } else {
        match game.turn() {
            Turn::Human => "Your turn: click a cell, or move with arrows and press Enter",
            Turn::Computer => "Computer is thinking...",
        }
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_divides_by_cell_footprint() {
        let board = Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT);

        assert_eq!(cell_at(board, 10, 5), Cell::new(0, 0));
        assert_eq!(cell_at(board, 10 + CELL_WIDTH, 5), Cell::new(0, 1));
        assert_eq!(
            cell_at(board, 10 + 2 * CELL_WIDTH + 1, 5 + 2 * CELL_HEIGHT + 1),
            Cell::new(2, 2)
        );
        // Last position inside a cell still maps to it.
        assert_eq!(
            cell_at(board, 10 + CELL_WIDTH - 1, 5 + CELL_HEIGHT - 1),
            Cell::new(0, 0)
        );
    }

    #[test]
    fn cell_at_rejects_positions_outside_the_board() {
        let board = Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT);

        assert_eq!(cell_at(board, 9, 5), None);
        assert_eq!(cell_at(board, 10, 4), None);
        assert_eq!(cell_at(board, 10 + BOARD_WIDTH, 5), None);
        assert_eq!(cell_at(board, 10, 5 + BOARD_HEIGHT), None);
    }

    #[test]
    fn board_area_is_stable_for_a_fixed_frame() {
        let frame = Rect::new(0, 0, 80, 24);
        assert_eq!(board_area(frame), board_area(frame));

        let board = board_area(frame);
        assert_eq!(board.width, BOARD_WIDTH);
        assert_eq!(board.height, BOARD_HEIGHT);
    }
}
