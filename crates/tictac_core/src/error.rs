//! Rejected actions.
//!
//! Every variant describes an action that left the game untouched. None of
//! them are fatal: stale clicks and late timers reach the engine during
//! normal play.

/// Reason an action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", index)]
    OutOfRange {
        /// Requested index.
        index: usize,
    },

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", index)]
    Occupied {
        /// Requested index.
        index: usize,
    },

    /// The round has been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// No mode has been selected for this round.
    #[display("Select a game mode first")]
    AwaitingModeSelection,

    /// The computer holds the turn; human input is ignored.
    #[display("Waiting for the computer to move")]
    ComputerToMove,

    /// A computer move fired while a human holds the turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// A computer move from an earlier round.
    #[display("Computer move belongs to a previous round")]
    StaleTicket,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_index_is_not_a_source() {
        let err = GameError::Occupied { index: 4 };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Cell 4 is already occupied");
    }

    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn Error + Send + Sync> = Box::new(GameError::OutOfRange { index: 9 });
        assert_eq!(err.to_string(), "Cell 9 is off the board (must be 0-8)");
    }
}
