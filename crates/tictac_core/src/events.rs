//! Notifications from the engine to whoever renders it.
//!
//! The engine never draws anything. It publishes [`GameEvent`]s to every
//! registered [`GameObserver`], and each event carries the literal values
//! a renderer needs.

use crate::phases::Score;
use crate::player::Seat;
use crate::schedule::CpuTicket;
use crate::types::{BOARD_SIZE, Cell};
use serde::{Deserialize, Serialize};

/// Status line text, kept structured until it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Waiting for a mode to be picked.
    #[display("Choose a game mode")]
    ChooseMode,
    /// A player holds the turn.
    #[display("{}'s turn", name)]
    Turn {
        /// Display name of the player to move.
        name: String,
    },
    /// A player completed a line.
    #[display("{} wins!", name)]
    Won {
        /// Display name of the winner.
        name: String,
        /// Seat of the winner.
        seat: Seat,
    },
    /// The board filled with no line.
    #[display("It's a tie!")]
    Tied,
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board changed; carries every cell.
    BoardChanged([Cell; BOARD_SIZE]),
    /// The status line changed.
    StatusChanged(Status),
    /// The session tally changed.
    ScoreChanged(Score),
    /// The computer took the turn; schedule this ticket.
    ComputerThinking(CpuTicket),
}

/// Receiver of engine notifications.
pub trait GameObserver {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::ChooseMode.to_string(), "Choose a game mode");
        let turn = Status::Turn {
            name: "Player 1".to_string(),
        };
        assert_eq!(turn.to_string(), "Player 1's turn");
        let won = Status::Won {
            name: "CPU".to_string(),
            seat: Seat::Second,
        };
        assert_eq!(won.to_string(), "CPU wins!");
        assert_eq!(Status::Tied.to_string(), "It's a tie!");
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &GameEvent| seen.push(event.clone());
            observer.notify(&GameEvent::StatusChanged(Status::Tied));
        }
        assert_eq!(seen, vec![GameEvent::StatusChanged(Status::Tied)]);
    }

    #[test]
    fn test_channel_forwarding_closure() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut observer = move |event: &GameEvent| {
            let _ = tx.send(event.clone());
        };
        observer.notify(&GameEvent::ScoreChanged(Score::default()));
        assert_eq!(
            rx.recv().unwrap(),
            GameEvent::ScoreChanged(Score::default())
        );
    }
}
