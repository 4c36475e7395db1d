//! Computer opponent move selection.
//!
//! Three-tier priority: take an immediate win, otherwise block the other
//! mark's immediate win, otherwise pick a random empty cell. The first two
//! tiers scan in row-major order.

use super::rules::is_winner;
use super::types::{Board, Cell, Mark, Square};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Picks the next move for `mark`, or `None` when the board is full.
///
/// Hypothetical placements are probed on a copy, so the caller's board is
/// left exactly as it was.
pub fn choose_move<R: Rng>(board: &Board, mark: Mark, rng: &mut R) -> Option<Cell> {
    let empty = board.empty_cells();

    if let Some(cell) = empty.iter().copied().find(|&cell| wins_at(board, cell, mark)) {
        debug!(?cell, ?mark, "taking winning cell");
        return Some(cell);
    }

    let threat = mark.opponent();
    if let Some(cell) = empty.iter().copied().find(|&cell| wins_at(board, cell, threat)) {
        debug!(?cell, ?mark, "blocking opposing win");
        return Some(cell);
    }

    let cell = empty.choose(rng).copied();
    debug!(?cell, ?mark, "falling back to random cell");
    cell
}

/// Would placing `mark` at `cell` complete a line?
fn wins_at(board: &Board, cell: Cell, mark: Mark) -> bool {
    let mut probe = board.clone();
    probe.set(cell, Square::Occupied(mark));
    is_winner(&probe, mark)
}
