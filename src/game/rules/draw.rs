//! Tie detection logic for tic-tac-toe.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no win for the player who just moved is a tie.
/// The win check always runs first; see the flow machine.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::types::Mark;
    use super::super::win::detect_win;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place_mark(4, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for index in 0..9 {
            board.place_mark(index, Mark::X).unwrap();
        }
        assert!(is_full(&board));
    }

    // Board X,O,X,O,X,O,O,X,O has no three-in-a-row for either mark.
    #[test]
    fn test_full_board_with_no_line_is_a_tie() {
        let mut board = Board::new();
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        for (index, mark) in marks.into_iter().enumerate() {
            board.place_mark(index, mark).unwrap();
        }
        assert!(is_full(&board));
        assert_eq!(detect_win(&board, Mark::X), None);
        assert_eq!(detect_win(&board, Mark::O), None);
    }
}
