//! Game logic: board, win rules, opponent strategy, and the turn machine.

mod engine;
mod rules;
mod strategy;
mod types;

pub use engine::{Game, Outcome, Turn, COMPUTER_MARK, HUMAN_MARK};
pub use rules::{is_draw, is_winner, winner};
pub use strategy::choose_move;
pub use types::{Board, Cell, Mark, Square};
