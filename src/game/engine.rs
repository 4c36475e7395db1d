//! Turn-taking state machine for one match against the computer.

use super::rules::{is_winner, winner};
use super::strategy;
use super::types::{Board, Cell, Mark, Square};
use rand::Rng;
use tracing::debug;

/// The mark the human plays.
pub const HUMAN_MARK: Mark = Mark::X;
/// The mark the computer plays.
pub const COMPUTER_MARK: Mark = Mark::O;

/// Whose move the machine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting for the human to click or place.
    Human,
    /// Waiting for the computer's reply.
    Computer,
}

/// How the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still being played.
    InProgress,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

/// Single source of truth for board, turn, and outcome.
///
/// Invalid input (occupied cell, out-of-turn move, move after the game
/// ended) is dropped without changing any state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Turn,
    outcome: Outcome,
}

impl Game {
    /// Starts a fresh match with the human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Human,
            outcome: Outcome::InProgress,
        }
    }

    /// Resumes from a position, recomputing the outcome from the board.
    pub fn with_board(board: Board, turn: Turn) -> Self {
        let outcome = match winner(&board) {
            Some(Mark::X) => Outcome::HumanWin,
            Some(Mark::O) => Outcome::ComputerWin,
            None if board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        };
        Self { board, turn, outcome }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it is. Meaningless once the game is over.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// True once the match has ended.
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Applies the human's move, or silently ignores it when it isn't the
    /// human's turn or the cell is taken.
    pub fn play_human(&mut self, cell: Cell) {
        if self.is_over() || self.turn != Turn::Human {
            debug!(?cell, "ignoring out-of-turn move");
            return;
        }
        if !self.board.is_empty(cell) {
            debug!(?cell, "ignoring move on occupied cell");
            return;
        }
        self.board.set(cell, Square::Occupied(HUMAN_MARK));
        self.settle(HUMAN_MARK, Outcome::HumanWin, Turn::Computer);
    }

    /// Runs the computer's turn. No-op unless the computer is to move.
    pub fn play_computer<R: Rng>(&mut self, rng: &mut R) {
        if self.is_over() || self.turn != Turn::Computer {
            return;
        }
        match strategy::choose_move(&self.board, COMPUTER_MARK, rng) {
            Some(cell) => {
                debug!(?cell, "computer plays");
                self.board.set(cell, Square::Occupied(COMPUTER_MARK));
                self.settle(COMPUTER_MARK, Outcome::ComputerWin, Turn::Human);
            }
            // A full board should already have settled as a draw.
            None => self.outcome = Outcome::Draw,
        }
    }

    /// Starts over once the current match has ended; ignored mid-game.
    pub fn restart(&mut self) {
        if !self.is_over() {
            return;
        }
        debug!("restarting match");
        *self = Self::new();
    }

    fn settle(&mut self, mark: Mark, win: Outcome, next: Turn) {
        if is_winner(&self.board, mark) {
            self.outcome = win;
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.turn = next;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
