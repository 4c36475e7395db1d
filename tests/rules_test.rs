//! Tests for win and draw evaluation.

use tictactoe_tui::game::{is_draw, is_winner, winner, Board, Cell, Mark, Square};

fn board(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            let square = match ch {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
            board.set(Cell::new(r, c).unwrap(), square);
        }
    }
    board
}

#[test]
fn empty_board_has_no_winner() {
    let board = Board::new();
    assert!(!is_winner(&board, Mark::X));
    assert!(!is_winner(&board, Mark::O));
    assert_eq!(winner(&board), None);
    assert!(!is_draw(&board));
}

#[test]
fn all_eight_lines_are_detected() {
    let lines = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        let mut board = Board::new();
        for (r, c) in line {
            board.set(Cell::new(r, c).unwrap(), Square::Occupied(Mark::O));
        }
        assert!(is_winner(&board, Mark::O), "missed line {line:?}");
        assert!(!is_winner(&board, Mark::X));
        assert_eq!(winner(&board), Some(Mark::O));
    }
}

#[test]
fn partial_line_is_not_a_win() {
    let board = board(["XX.", "O..", "..O"]);
    assert!(!is_winner(&board, Mark::X));
    assert!(!is_winner(&board, Mark::O));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    let board = board(["XOX", "XXO", "OXO"]);
    assert!(board.is_full());
    assert_eq!(winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn full_board_with_a_line_is_a_win_not_a_draw() {
    let board = board(["XXX", "OOX", "OXO"]);
    assert!(board.is_full());
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(!is_draw(&board));
}

#[test]
fn evaluation_never_mutates_the_board() {
    let board = board(["XO.", ".X.", "O.X"]);
    let snapshot = board.clone();

    let _ = is_winner(&board, Mark::X);
    let _ = is_winner(&board, Mark::O);
    let _ = winner(&board);
    let _ = is_draw(&board);
    let _ = board.is_full();

    assert_eq!(board, snapshot);
}
