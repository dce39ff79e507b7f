//! Tictac - Unified CLI
//!
//! Plays tic-tac-toe in the terminal against a friend or the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictac::{AppConfig, Cli, Command, ModeArg, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            cpu_delay_ms,
            seed,
        } => run_play(config, mode, cpu_delay_ms, seed).await,
        Command::InitConfig { path, force } => run_init_config(path, force),
    }
}

/// Run the terminal game
async fn run_play(
    config: Option<PathBuf>,
    mode: Option<ModeArg>,
    cpu_delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = AppConfig::load(config.as_deref())?;
    if let Some(millis) = cpu_delay_ms {
        config.set_cpu_delay_ms(millis);
    }

    run_tui(config, mode.map(Into::into), seed).await
}

/// Write the default config file
fn run_init_config(path: PathBuf, force: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    AppConfig::default().write_to(&path, force)?;
    info!("Wrote default configuration");
    println!("Wrote {}", path.display());
    Ok(())
}
