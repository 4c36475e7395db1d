//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Play tic-tac-toe against the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe-tui")]
#[command(version)]
pub struct Cli {
    /// Seed for the opponent's random fallback (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How long the computer pretends to think, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub think_ms: u64,

    /// File to write logs to (the alternate screen hides stderr)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// The computer's thinking pause.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}
