//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => MARK_X,
        Mark::O => MARK_O,
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index if any.
    ///
    /// Every click is reported; legality is decided by the game state.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        next_player: Mark,
        winning_line: Option<[usize; 3]>,
    ) -> Option<usize> {
        let available = ui.available_size();
        let board_size = (available.x.min(available.y) - 20.0).max(MIN_BOARD_SIZE);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        if let Some(line) = winning_line {
            self.draw_winning_cells(&painter, &line);
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_index(p));

        // Hover preview on playable cells only
        if let Some(idx) = hovered {
            if winning_line.is_none() && board.is_empty(idx) {
                let rect = self.cell_rect(idx);
                painter.rect_filled(rect.shrink(2.0), CornerRadius::same(4), CELL_HOVER);
                self.draw_mark(&painter, idx, next_player, preview(mark_color(next_player)));
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if response.clicked() {
            hovered
        } else {
            None
        }
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (idx, cell) in board.cells().iter().enumerate() {
            if let Some(mark) = cell {
                self.draw_mark(painter, idx, *mark, mark_color(*mark));
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, idx: usize, mark: Mark, color: Color32) {
        painter.text(
            self.cell_center(idx),
            egui::Align2::CENTER_CENTER,
            mark.as_str(),
            FontId::proportional(self.cell_size * MARK_FONT_RATIO),
            color,
        );
    }

    /// Fill every cell of the winning line
    fn draw_winning_cells(&self, painter: &Painter, line: &[usize; 3]) {
        for &idx in line {
            painter.rect_filled(
                self.cell_rect(idx).shrink(2.0),
                CornerRadius::same(4),
                WIN_HIGHLIGHT,
            );
        }
    }

    fn cell_rect(&self, idx: usize) -> Rect {
        let pos = Pos::from_index(idx);
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, idx: usize) -> Pos2 {
        self.cell_rect(idx).center()
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_index(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if Pos::is_valid(row, col) {
            let idx = Pos::new(row as u8, col as u8).to_index();
            debug_assert!(idx < TOTAL_CELLS);
            Some(idx)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(2.0 * BOARD_MARGIN + 300.0)),
        }
    }

    #[test]
    fn test_screen_to_index_roundtrip() {
        let view = view();
        for idx in 0..TOTAL_CELLS {
            assert_eq!(view.screen_to_index(view.cell_center(idx)), Some(idx));
        }
    }

    #[test]
    fn test_margin_is_outside_board() {
        let view = view();
        assert_eq!(view.screen_to_index(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_index(Pos2::new(BOARD_MARGIN + 301.0, 50.0)), None);
    }

    #[test]
    fn test_mark_colors_differ() {
        assert_ne!(mark_color(Mark::X), mark_color(Mark::O));
    }
}
