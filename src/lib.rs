//! Tic-tac-toe against a computer opponent, in the terminal.
//!
//! [`game`] holds the board, win rules, the opponent's move policy, and the
//! turn state machine; [`tui`] is the ratatui frontend around it.

#![warn(missing_docs)]

pub mod cli;
pub mod game;
pub mod tui;
