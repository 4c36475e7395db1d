//! Keyboard navigation between board cells.

use crate::game::Cell;
use crossterm::event::KeyCode;

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Cell::new(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_move_one_cell() {
        let center = Cell::CENTER;
        assert_eq!(move_cursor(center, KeyCode::Up), Cell::new(0, 1).unwrap());
        assert_eq!(move_cursor(center, KeyCode::Down), Cell::new(2, 1).unwrap());
        assert_eq!(move_cursor(center, KeyCode::Left), Cell::new(1, 0).unwrap());
        assert_eq!(move_cursor(center, KeyCode::Right), Cell::new(1, 2).unwrap());
    }

    #[test]
    fn cursor_stops_at_edges() {
        let corner = Cell::new(0, 0).unwrap();
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);

        let far = Cell::new(2, 2).unwrap();
        assert_eq!(move_cursor(far, KeyCode::Down), far);
        assert_eq!(move_cursor(far, KeyCode::Right), far);
    }

    #[test]
    fn other_keys_leave_cursor_alone() {
        let center = Cell::CENTER;
        assert_eq!(move_cursor(center, KeyCode::Char('x')), center);
        assert_eq!(move_cursor(center, KeyCode::Enter), center);
    }
}
