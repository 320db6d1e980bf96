//! Property tests for knight move generation.

use proptest::prelude::*;
use pursuit_kernel::geometry::board::Board;
use pursuit_kernel::geometry::cell::Cell;
use pursuit_kernel::motion::knight::{legal_moves, KNIGHT_OFFSETS};

fn board_and_cell() -> impl Strategy<Value = (i32, Cell)> {
    (3i32..40).prop_flat_map(|d| (Just(d), -2..=d + 1, -2..=d + 1))
        .prop_map(|(d, x, y)| (d, Cell::new(x, y)))
}

/// Hunter at least two cells inside the interior edge on each axis.
fn board_and_deep_cell() -> impl Strategy<Value = (i32, Cell)> {
    (7i32..40).prop_flat_map(|d| (Just(d), 3..=d - 4, 3..=d - 4))
        .prop_map(|(d, x, y)| (d, Cell::new(x, y)))
}

proptest! {
    #[test]
    fn moves_stay_inside_interior((d, from) in board_and_cell()) {
        let board = Board::new(d).unwrap();
        for m in &legal_moves(&board, from) {
            prop_assert!(board.is_interior(*m), "{m} outside interior of {d}");
        }
    }

    #[test]
    fn moves_are_exactly_interior_knight_offsets((d, from) in board_and_cell()) {
        let board = Board::new(d).unwrap();
        let mut expected: Vec<Cell> = KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| from.offset(dx, dy))
            .filter(|c| board.is_interior(*c))
            .collect();
        expected.sort();
        expected.dedup();
        let actual = legal_moves(&board, from);
        prop_assert_eq!(actual.as_slice(), expected.as_slice());
    }

    #[test]
    fn deep_hunter_always_has_moves((d, from) in board_and_deep_cell()) {
        let board = Board::new(d).unwrap();
        prop_assert!(!legal_moves(&board, from).is_empty());
    }

    #[test]
    fn moves_are_symmetric((d, from) in board_and_cell()) {
        let board = Board::new(d).unwrap();
        prop_assume!(board.is_interior(from));
        for m in &legal_moves(&board, from) {
            prop_assert!(legal_moves(&board, *m).contains(from));
        }
    }

    #[test]
    fn moves_are_deterministic((d, from) in board_and_cell()) {
        let board = Board::new(d).unwrap();
        prop_assert_eq!(legal_moves(&board, from), legal_moves(&board, from));
    }
}
