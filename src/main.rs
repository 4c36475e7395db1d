//! Entry point: parse flags, set up logging, run the game.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::cli::Cli;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so they don't fight the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting tic-tac-toe");
    tictactoe_tui::tui::run(cli.seed, cli.think_delay())
}
