//! Win and draw evaluation.

use super::types::{Board, Cell, Mark, Square};

/// The 8 winning lines.
const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Columns
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(0, 2), Cell::at(1, 1), Cell::at(2, 0)],
];

/// True when some line consists entirely of `mark`.
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.get(cell) == Square::Occupied(mark)))
}

/// Returns the mark holding a completed line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    if is_winner(board, Mark::X) {
        Some(Mark::X)
    } else if is_winner(board, Mark::O) {
        Some(Mark::O)
    } else {
        None
    }
}

/// A full board with no completed line. Win checks come first: a last move
/// that completes a line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
