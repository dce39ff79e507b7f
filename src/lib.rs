//! Tictac - tic-tac-toe in the terminal
//!
//! The game rules and state live in [`tictac_core`]. This crate adds the
//! presentation layer on top of it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for names, computer delay, and logging
//! - **CLI**: `play` and `init-config` subcommands
//! - **TUI**: ratatui front end driven by engine notifications, with a tokio
//!   timer for computer moves
//!
//! # Example
//!
//! ```no_run
//! use tictac::{AppConfig, run_tui};
//! use tictac_core::Mode;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! run_tui(config, Some(Mode::SinglePlayer), None).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, ModeArg};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Terminal UI
pub use tui::{App, CpuScheduler, HitMap, Orchestrator, Screen, UiAction, draw, map_event, run_tui};
