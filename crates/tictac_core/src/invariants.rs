//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that must hold after every move.
//! The engine checks them in debug builds; tests can check them directly.

use crate::rules::WINNING_LINES;
use crate::types::{Board, Cell, Marker};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the two markers are never more than one apart.
///
/// Turns alternate, so whoever opened has at most one extra mark.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        board.count(Marker::X).abs_diff(board.count(Marker::O)) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Invariant: X and O never both own a complete line.
///
/// The round stops at the first completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let owns_line = |marker: Marker| {
            WINNING_LINES.iter().any(|line| {
                line.iter()
                    .all(|&i| board.cell(i) == Some(Cell::Marked(marker)))
            })
        };
        !(owns_line(Marker::X) && owns_line(Marker::O))
    }

    fn description() -> &'static str {
        "At most one marker completes a line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
