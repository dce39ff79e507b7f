//! Tic-tac-toe game engine.
//!
//! A 3x3 board, two humans or one human against a random-move computer,
//! win/tie detection, and a running win/loss tally for the session.
//!
//! # Architecture
//!
//! - [`Board`]: the nine cells and their accessors
//! - [`rules`]: winning lines, winner, full-board and game-over checks
//! - [`invariants`]: board properties checked after every move
//! - [`GameEngine`]: turns, modes, scoring, computer tickets, observers
//!
//! The engine never renders and never sleeps. Presentation layers register a
//! [`GameObserver`] and schedule the [`CpuTicket`]s it hands out.
//!
//! # Example
//!
//! ```
//! use tictac_core::{EngineSettings, GameEngine, Mode, Phase, Seat};
//!
//! let mut engine = GameEngine::seeded(EngineSettings::default(), 42);
//! engine.select_mode(Mode::TwoPlayer);
//!
//! for index in [0, 3, 1, 4, 2] {
//!     engine.play_turn(index).unwrap();
//! }
//!
//! assert_eq!(engine.phase(), Phase::Won { winner: Seat::First });
//! assert_eq!(engine.score().wins, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
pub mod invariants;
mod phases;
mod player;
pub mod rules;
mod schedule;
mod settings;
mod types;

pub use engine::{GameEngine, TurnOutcome};
pub use error::GameError;
pub use events::{GameEvent, GameObserver, Status};
pub use phases::{Phase, Score};
pub use player::{FirstMove, Mode, Player, Seat};
pub use schedule::{CpuTicket, SessionToken};
pub use settings::{DEFAULT_CPU_DELAY, EngineSettings};
pub use types::{BOARD_SIZE, Board, Cell, Marker};
