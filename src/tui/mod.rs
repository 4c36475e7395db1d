//! Terminal frontend: window setup, the event loop, and input handling.
//!
//! Single-threaded and cooperative: each iteration draws a frame, lets the
//! computer reply once its deadline passes, then polls input with a short
//! timeout. The board is only ever touched between poll and draw.

mod input;
pub mod ui;

use crate::game::{Cell, Game, Turn};
use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long each input poll waits before the next frame.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the game until the user quits.
///
/// `seed` fixes the opponent's random fallback; `think_delay` is the visible
/// pause before the computer's reply.
pub fn run(seed: Option<u64>, think_delay: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, seed, think_delay);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    seed: Option<u64>,
    think_delay: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut game = Game::new();
    let mut cursor = Cell::CENTER;
    let mut reply_due: Option<Instant> = None;
    let mut frame_area = Rect::default();

    info!(?seed, ?think_delay, "game loop started");

    loop {
        terminal.draw(|frame| {
            frame_area = frame.area();
            ui::draw(frame, &game, cursor);
        })?;

        // The computer replies on a deadline, not a sleep, so quit stays
        // responsive while it "thinks".
        if game.turn() == Turn::Computer && !game.is_over() {
            let due = *reply_due.get_or_insert_with(|| Instant::now() + think_delay);
            if Instant::now() >= due {
                game.play_computer(&mut rng);
                reply_due = None;
            }
        } else {
            reply_due = None;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("quit requested");
                    return Ok(());
                }
                KeyCode::Char(' ') => game.restart(),
                KeyCode::Enter => game.play_human(cursor),
                code => cursor = input::move_cursor(cursor, code),
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let board = ui::board_area(frame_area);
                if let Some(cell) = ui::cell_at(board, mouse.column, mouse.row) {
                    debug!(?cell, "cell clicked");
                    game.play_human(cell);
                }
            }
            _ => {}
        }
    }
}
