//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the engine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner, winning_line};

use crate::types::Board;
use tracing::instrument;

/// Checks whether the round has ended.
///
/// True when any line is complete or when no empty cell remains.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}
