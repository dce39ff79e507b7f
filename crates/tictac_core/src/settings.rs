//! Engine settings: display names, computer pacing, and opening policy.

use crate::player::FirstMove;
use derive_setters::Setters;
use std::time::Duration;

/// Default delay before the computer plays, so its turn is visible.
pub const DEFAULT_CPU_DELAY: Duration = Duration::from_millis(500);

/// Settings applied to every round an engine starts.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(prefix = "with_", into)]
pub struct EngineSettings {
    /// Name shown for the first seat.
    pub first_player_name: String,
    /// Name shown for the second seat in two-player mode.
    pub second_player_name: String,
    /// Name shown for the computer in single-player mode.
    pub cpu_name: String,
    /// How long the computer "thinks" before its move fires.
    pub cpu_delay: Duration,
    /// Who opens a single-player round.
    pub first_move: FirstMove,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            first_player_name: "Player 1".to_string(),
            second_player_name: "Player 2".to_string(),
            cpu_name: "CPU".to_string(),
            cpu_delay: DEFAULT_CPU_DELAY,
            first_move: FirstMove::Random,
        }
    }
}
