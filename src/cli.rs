//! Command-line interface for tictac.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictac_core::Mode;

use crate::config::DEFAULT_CONFIG_FILE;

/// Tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or a random-move CPU", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (click cells with the mouse)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the mode menu for the first round
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Override the computer's thinking delay
        #[arg(long)]
        cpu_delay_ms: Option<u64>,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Where to write the file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Mode names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One human against the computer
    Single,
    /// Two humans
    Two,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => Mode::SinglePlayer,
            ModeArg::Two => Mode::TwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "tictac",
            "play",
            "--mode",
            "single",
            "--cpu-delay-ms",
            "0",
            "--seed",
            "9",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                config,
                mode,
                cpu_delay_ms,
                seed,
            } => {
                assert_eq!(config, None);
                assert_eq!(mode.map(Mode::from), Some(Mode::SinglePlayer));
                assert_eq!(cpu_delay_ms, Some(0));
                assert_eq!(seed, Some(9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_config_defaults() {
        let cli = Cli::try_parse_from(["tictac", "init-config"]).unwrap();
        match cli.command {
            Command::InitConfig { path, force } => {
                assert_eq!(path, PathBuf::from(DEFAULT_CONFIG_FILE));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
