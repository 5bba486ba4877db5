//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Mark};
use tracing::instrument;

/// A winning arrangement: three cell indices forming a line.
pub type WinLine = [usize; 3];

/// The 8 fixed win-lines, in evaluation order.
pub const WIN_LINES: [WinLine; 8] = [
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

/// Checks whether the given mark has three in a row.
///
/// Evaluates [`WIN_LINES`] in order and returns the first line whose
/// three cells are all occupied by `mark`, or `None` if no line
/// qualifies. Under correct play only one line can be complete at a
/// time, so the order only matters for artificially constructed boards.
#[instrument]
pub fn detect_win(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|line| {
        line.iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(mark)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_win_empty_board() {
        let board = Board::new();
        assert_eq!(detect_win(&board, Mark::X), None);
        assert_eq!(detect_win(&board, Mark::O), None);
    }

    #[test]
    fn test_win_top_row() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.place_mark(index, Mark::X).unwrap();
        }
        assert_eq!(detect_win(&board, Mark::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_win_column() {
        let mut board = Board::new();
        for index in [1, 4, 7] {
            board.place_mark(index, Mark::O).unwrap();
        }
        assert_eq!(detect_win(&board, Mark::O), Some([1, 4, 7]));
    }

    #[test]
    fn test_win_diagonal() {
        let mut board = Board::new();
        for index in [2, 4, 6] {
            board.place_mark(index, Mark::O).unwrap();
        }
        assert_eq!(detect_win(&board, Mark::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_win_only_for_matching_mark() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.place_mark(index, Mark::O).unwrap();
        }
        assert_eq!(detect_win(&board, Mark::X), None);
        assert_eq!(detect_win(&board, Mark::O), Some([0, 1, 2]));
    }

    #[test]
    fn test_no_win_incomplete_line() {
        let mut board = Board::new();
        board.place_mark(0, Mark::X).unwrap();
        board.place_mark(1, Mark::X).unwrap();
        assert_eq!(detect_win(&board, Mark::X), None);
    }

    #[test]
    fn test_no_win_mixed_line() {
        let mut board = Board::new();
        board.place_mark(0, Mark::X).unwrap();
        board.place_mark(1, Mark::O).unwrap();
        board.place_mark(2, Mark::X).unwrap();
        assert_eq!(detect_win(&board, Mark::X), None);
    }

    // Two complete rows can only exist on hand-built boards; the first
    // line in evaluation order is reported.
    #[test]
    fn test_first_line_reported_on_ambiguous_board() {
        let mut board = Board::new();
        for index in [3, 4, 5, 0, 1, 2] {
            board.place_mark(index, Mark::X).unwrap();
        }
        assert_eq!(detect_win(&board, Mark::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_every_line_detected() {
        for line in WIN_LINES {
            let mut board = Board::new();
            for index in line {
                board.place_mark(index, Mark::X).unwrap();
            }
            assert_eq!(detect_win(&board, Mark::X), Some(line));
        }
    }
}
