//! Board tests - cell storage, bounds contract and row clearing

use brickfall::core::Board;
use brickfall::types::{CellState, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            assert_eq!(board.state(x, y), CellState::Empty, "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.cells().count(), 200);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();

    board.set_state(5, 10, CellState::Active);
    assert_eq!(board.state(5, 10), CellState::Active);

    board.set_state(0, 0, CellState::Locked);
    assert_eq!(board.state(0, 0), CellState::Locked);

    board.set_state(5, 10, CellState::Empty);
    assert_eq!(board.get(5, 10), Some(CellState::Empty));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT), None);
}

#[test]
#[should_panic(expected = "outside the 10x20 grid")]
fn test_state_above_ceiling_panics() {
    let board = Board::default();
    let _ = board.state(4, BOARD_HEIGHT);
}

#[test]
#[should_panic(expected = "outside the 10x20 grid")]
fn test_set_state_off_side_panics() {
    let mut board = Board::default();
    board.set_state(-1, 3, CellState::Locked);
}

#[test]
fn test_custom_dimensions() {
    let board = Board::new(6, 8);
    assert_eq!(board.cells().count(), 48);
    assert!(board.contains(5, 7));
    assert!(!board.contains(6, 7));
}

#[test]
fn test_clear_single_full_row_drops_rows_above() {
    let mut board = Board::new(4, 6);
    for x in 0..4 {
        board.set_state(x, 0, CellState::Locked);
    }
    board.set_state(1, 1, CellState::Locked);
    board.set_state(2, 3, CellState::Locked);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0]);
    assert_eq!(board.state(1, 0), CellState::Locked);
    assert_eq!(board.state(2, 2), CellState::Locked);
    assert_eq!(board.count(CellState::Locked), 2);
    assert!(board.row(5).iter().all(|c| c.is_empty()));
}

#[test]
fn test_clear_non_adjacent_full_rows() {
    let mut board = Board::new(4, 6);
    for x in 0..4 {
        board.set_state(x, 1, CellState::Locked);
        board.set_state(x, 3, CellState::Locked);
    }
    board.set_state(0, 0, CellState::Locked);
    board.set_state(3, 2, CellState::Locked);
    board.set_state(2, 4, CellState::Locked);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[1, 3]);
    assert_eq!(board.row(0), &[CellState::Locked, CellState::Empty, CellState::Empty, CellState::Empty]);
    assert_eq!(board.row(1), &[CellState::Empty, CellState::Empty, CellState::Empty, CellState::Locked]);
    assert_eq!(board.row(2), &[CellState::Empty, CellState::Empty, CellState::Locked, CellState::Empty]);
    assert_eq!(board.count(CellState::Locked), 3);
}

#[test]
fn test_no_full_rows_is_noop() {
    let mut board = Board::default();
    board.set_state(3, 0, CellState::Locked);
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_resets_everything() {
    let mut board = Board::default();
    board.set_state(1, 1, CellState::Locked);
    board.set_state(2, 2, CellState::Active);
    board.clear();
    assert_eq!(board.count(CellState::Empty), 200);
}
