//! Terminal UI for tictac

mod app;
mod input;
mod orchestrator;
mod scheduler;
mod terminal;
mod ui;

pub use app::{App, Screen};
pub use input::{HitMap, UiAction, map_event};
pub use orchestrator::Orchestrator;
pub use scheduler::CpuScheduler;
pub use ui::draw;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use terminal::TerminalGuard;
use tictac_core::{GameEngine, Mode};
use tracing::{error, info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the terminal game until the user quits.
///
/// `initial_mode` skips the mode menu for the first round. `seed` makes the
/// computer's moves reproducible.
pub async fn run_tui(config: AppConfig, initial_mode: Option<Mode>, seed: Option<u64>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %config.log_file().display(), "Starting tictac TUI");

    let settings = config.engine_settings();
    let engine = match seed {
        Some(seed) => GameEngine::seeded(settings, seed),
        None => GameEngine::new(settings),
    };
    let mut orchestrator = Orchestrator::new(engine);
    if let Some(mode) = initial_mode {
        orchestrator.dispatch(UiAction::SelectMode(mode));
    }

    // Dropping the guard on any early return restores the terminal.
    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_game_loop(&mut terminal, &mut orchestrator).await;

    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = %orchestrator.engine().score(), "TUI exited");
    res
}

#[instrument(skip_all)]
async fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    orchestrator: &mut Orchestrator,
) -> Result<()> {
    loop {
        orchestrator.pump();

        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = draw(frame, orchestrator.app()))?;

        if orchestrator.app().should_quit() {
            info!("User quit");
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            if let Some(action) = map_event(&event, &hits, orchestrator.app().screen()) {
                orchestrator.dispatch(action);
            }
        } else {
            // Let the computer timer run between polls.
            tokio::task::yield_now().await;
        }
    }
}
