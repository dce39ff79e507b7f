//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Marker};
use tracing::instrument;

/// The eight lines that win the game, as board indices.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first complete line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.cell(a);
        cell != Some(Cell::Empty) && cell == board.cell(b) && cell == board.cell(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if that marker fills a line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.cell(a).and_then(Cell::marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marker: Marker, indices: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in indices {
            board.set_cell(i, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Marker::X, &[0, 1, 2]);
        assert_eq!(check_winner(&board), Some(Marker::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(Marker::O, &[2, 4, 6]);
        assert_eq!(check_winner(&board), Some(Marker::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let board = board_with(Marker::O, &line);
            assert_eq!(check_winner(&board), Some(Marker::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Marker::X, &[0, 1]);
        board.set_cell(2, Marker::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Marker::X, &[3, 4]);
        assert_eq!(check_winner(&board), None);
    }
}
