//! Tests for board storage and placement.

use tictactoe_tui::{Board, Cell, Mark, PlaceError, detect_win, is_full};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
    assert!(!is_full(&board));
}

#[test]
fn test_place_mark_sets_cell() {
    let mut board = Board::new();
    board.place_mark(4, Mark::X).unwrap();
    assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    assert!(!board.is_empty(4));
    assert!(board.is_empty(0));
}

#[test]
fn test_place_mark_rejects_occupied_cell() {
    let mut board = Board::new();
    board.place_mark(4, Mark::X).unwrap();
    let before = board.clone();

    let result = board.place_mark(4, Mark::O);
    assert_eq!(result, Err(PlaceError::CellOccupied(4)));
    // Rejection never changes board state, however often it happens.
    assert_eq!(board, before);
    let result = board.place_mark(4, Mark::O);
    assert_eq!(result, Err(PlaceError::CellOccupied(4)));
    assert_eq!(board, before);
}

#[test]
fn test_place_mark_rejects_out_of_range_index() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(
        board.place_mark(9, Mark::X),
        Err(PlaceError::IndexOutOfRange(9))
    );
    assert_eq!(
        board.place_mark(usize::MAX, Mark::X),
        Err(PlaceError::IndexOutOfRange(usize::MAX))
    );
    assert_eq!(board, before);
}

#[test]
fn test_reset_round_trip() {
    let mut board = Board::new();
    for index in 0..9 {
        board.place_mark(index, Mark::X).unwrap();
    }
    board.reset();
    assert!(!is_full(&board));
    assert_eq!(detect_win(&board, Mark::X), None);
    assert_eq!(detect_win(&board, Mark::O), None);
    assert!(board.cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_is_full_requires_every_cell() {
    let mut board = Board::new();
    for index in 0..8 {
        board.place_mark(index, Mark::O).unwrap();
    }
    assert!(!is_full(&board));
    board.place_mark(8, Mark::O).unwrap();
    assert!(is_full(&board));
}

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
}
