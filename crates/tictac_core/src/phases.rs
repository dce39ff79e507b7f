//! Round lifecycle and the session tally.

use crate::player::Seat;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle state of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Board is cleared and no mode has been chosen yet.
    AwaitingModeSelection,
    /// Moves are accepted.
    InProgress,
    /// A seat completed a line.
    Won {
        /// Seat that completed the line.
        winner: Seat,
    },
    /// Board filled with no complete line.
    Tied,
}

impl Phase {
    /// True once the round has been won or tied.
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Won { .. } | Phase::Tied)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Seat> {
        match self {
            Phase::Won { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Win/loss tally for the first seat, kept for the whole session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("Wins: {} | Losses: {}", wins, losses)]
pub struct Score {
    /// Rounds won by the first seat.
    pub wins: u32,
    /// Rounds won by the second seat.
    pub losses: u32,
}

impl Score {
    /// Credits a finished round to `winner`.
    pub fn record(&mut self, winner: Seat) {
        match winner {
            Seat::First => self.wins += 1,
            Seat::Second => self.losses += 1,
        }
    }

    /// Number of decided rounds.
    pub fn decided(&self) -> u32 {
        self.wins + self.losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_by_seat() {
        let mut score = Score::default();
        score.record(Seat::First);
        score.record(Seat::Second);
        score.record(Seat::Second);
        assert_eq!(score, Score { wins: 1, losses: 2 });
        assert_eq!(score.decided(), 3);
    }

    #[test]
    fn test_score_display() {
        let score = Score { wins: 3, losses: 1 };
        assert_eq!(score.to_string(), "Wins: 3 | Losses: 1");
    }

    #[test]
    fn test_phase_helpers() {
        assert!(!Phase::AwaitingModeSelection.is_finished());
        assert!(!Phase::InProgress.is_finished());
        assert!(Phase::Tied.is_finished());
        let won = Phase::Won { winner: Seat::Second };
        assert!(won.is_finished());
        assert_eq!(won.winner(), Some(Seat::Second));
        assert_eq!(Phase::Tied.winner(), None);
    }
}
