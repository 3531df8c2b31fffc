//! Win condition checking
//!
//! A player wins with three marks on any row, column or diagonal. Lines are
//! checked in a fixed order (rows, columns, diagonals) and the first complete
//! one is reported. A full board with no line is not reported separately.

use tracing::instrument;

use crate::board::{Board, Mark};

/// The 8 winning lines, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Winner and the line that produced the win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinInfo {
    pub winner: Mark,
    pub line: [usize; 3],
}

impl WinInfo {
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Find the first complete line on the board
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<WinInfo> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => Some(WinInfo {
            winner: mark,
            line: [a, b, c],
        }),
        _ => None,
    })
}

/// Winning mark only
#[inline]
pub fn winner(board: &Board) -> Option<Mark> {
    check_winner(board).map(|info| info.winner)
}
