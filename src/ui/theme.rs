//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 241, 232);
pub const CELL_HOVER: Color32 = Color32::from_rgb(232, 226, 212);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Marks
pub const MARK_X: Color32 = Color32::from_rgb(40, 90, 170);
pub const MARK_O: Color32 = Color32::from_rgb(190, 60, 50);

// Winning cells
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(150, 230, 150);
pub const WIN_TEXT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MIN_BOARD_SIZE: f32 = 120.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_FONT_RATIO: f32 = 0.6;
