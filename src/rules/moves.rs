//! Move legality

use crate::board::{Board, TOTAL_CELLS};
use crate::error::MoveError;

use super::win::check_winner;

/// Check that a mark may be placed at `index`.
///
/// A move is rejected when the game is already won, the index is off the
/// board, or the cell is taken. The win check comes first.
pub fn validate_move(board: &Board, index: usize) -> Result<(), MoveError> {
    if let Some(info) = check_winner(board) {
        return Err(MoveError::GameOver { winner: info.winner });
    }
    if index >= TOTAL_CELLS {
        return Err(MoveError::OutOfBounds { index });
    }
    if !board.is_empty(index) {
        return Err(MoveError::Occupied { index });
    }
    Ok(())
}

#[inline]
pub fn is_valid_move(board: &Board, index: usize) -> bool {
    validate_move(board, index).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::new();
        for idx in 0..TOTAL_CELLS {
            assert!(is_valid_move(&board, idx));
        }
    }

    #[test]
    fn test_occupied_rejected() {
        let board = Board::new().with_mark(3, Mark::O);
        assert_eq!(
            validate_move(&board, 3),
            Err(MoveError::Occupied { index: 3 })
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            validate_move(&Board::new(), 9),
            Err(MoveError::OutOfBounds { index: 9 })
        );
    }

    #[test]
    fn test_won_board_rejects_everything() {
        let board = Board::new()
            .with_mark(0, Mark::X)
            .with_mark(1, Mark::X)
            .with_mark(2, Mark::X);
        assert_eq!(
            validate_move(&board, 5),
            Err(MoveError::GameOver { winner: Mark::X })
        );
        assert_eq!(
            validate_move(&board, 0),
            Err(MoveError::GameOver { winner: Mark::X })
        );
    }
}
