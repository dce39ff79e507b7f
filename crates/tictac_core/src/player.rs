//! Seats, players, and game modes.

use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two turn-taking identities in a round.
///
/// Scoring is decided by seat alone, never by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The local player. Always plays X.
    First,
    /// The second human or the computer. Always plays O.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Marker owned by this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::First => Marker::X,
            Seat::Second => Marker::O,
        }
    }

    /// Position of this seat in a two-element player array.
    pub(crate) fn slot(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Who chooses the moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub(crate) enum Controller {
    /// Moves arrive from pointer input.
    Human,
    /// Moves are picked at random by the engine.
    Computer,
}

/// A participant in the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    controller: Controller,
}

impl Player {
    /// Creates a human player in `seat`.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn human(seat: Seat, name: impl AsRef<str>) -> Self {
        Self {
            seat,
            name: name.as_ref().to_string(),
            controller: Controller::Human,
        }
    }

    /// Creates the computer opponent. It always sits in the second seat.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn computer(name: impl AsRef<str>) -> Self {
        Self {
            seat: Seat::Second,
            name: name.as_ref().to_string(),
            controller: Controller::Computer,
        }
    }

    /// Seat this player occupies.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marker placed by this player.
    pub fn marker(&self) -> Marker {
        self.seat.marker()
    }

    /// True for the computer opponent.
    pub fn is_computer(&self) -> bool {
        self.controller == Controller::Computer
    }
}

/// Whether the second seat is a human or the computer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One human against the computer.
    SinglePlayer,
    /// Two humans sharing the board.
    TwoPlayer,
}

impl Mode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Mode::SinglePlayer => "1 Player",
            Mode::TwoPlayer => "2 Players",
        }
    }
}

/// Who opens a single-player round.
///
/// Defaults to [`FirstMove::Random`], a coin flip between the human and
/// the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMove {
    /// Uniform choice between the two seats.
    #[default]
    Random,
    /// The human always opens.
    Human,
    /// The computer always opens.
    Computer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_seats_own_fixed_markers() {
        assert_eq!(Seat::First.marker(), Marker::X);
        assert_eq!(Seat::Second.marker(), Marker::O);
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other().other(), Seat::Second);
    }

    #[test]
    fn test_computer_sits_second() {
        let cpu = Player::computer("CPU");
        assert_eq!(cpu.seat(), Seat::Second);
        assert_eq!(cpu.marker(), Marker::O);
        assert!(cpu.is_computer());
    }

    #[test]
    fn test_human_named_cpu_is_still_human() {
        let impostor = Player::human(Seat::Second, "CPU");
        assert!(!impostor.is_computer());
        assert_eq!(impostor.seat(), Seat::Second);
    }

    #[test]
    fn test_mode_labels_are_distinct() {
        let labels: Vec<_> = Mode::iter().map(Mode::label).collect();
        assert_eq!(labels, vec!["1 Player", "2 Players"]);
    }
}
