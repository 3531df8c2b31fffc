//! Board structure

use super::{Cell, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// 3x3 board, cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }

    /// Get the cell at an index, `None` when out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn get_pos(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if the cell at `index` exists and is empty
    #[inline]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Return a copy of this board with `mark` at `index`.
    /// The caller is responsible for validating the move.
    #[inline]
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = Some(mark);
        self
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Number of marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let symbol = match self.cells[row * BOARD_SIZE + col] {
                    Some(mark) => mark.as_str(),
                    None => ".",
                };
                f.write_str(symbol)?;
            }
            if row + 1 < BOARD_SIZE {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}
