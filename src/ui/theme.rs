//! Theme constants for the Fourth Protocol GUI

use egui::Color32;

use crate::Side;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const CELL_LIGHT: Color32 = Color32::from_rgb(216, 222, 233);
pub const CELL_DARK: Color32 = Color32::from_rgb(196, 204, 218);
pub const GRID_LINE: Color32 = Color32::from_rgb(76, 86, 106);

// Piece colors
pub const RED_PIECE: Color32 = Color32::from_rgb(200, 60, 60);
pub const RED_PIECE_RIM: Color32 = Color32::from_rgb(130, 30, 30);
pub const BLUE_PIECE: Color32 = Color32::from_rgb(60, 110, 200);
pub const BLUE_PIECE_RIM: Color32 = Color32::from_rgb(30, 60, 130);
pub const PIECE_GLYPH: Color32 = Color32::from_rgb(250, 250, 252);

// Markers
pub const SELECTION: Color32 = Color32::from_rgb(255, 200, 60);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(235, 160, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hint_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 160, 90, 170)
}

pub fn hover_cell() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const HINT_RADIUS_RATIO: f32 = 0.12;

/// Fill and rim colour of a side's pieces
pub fn side_colors(side: Side) -> (Color32, Color32) {
    match side {
        Side::Red => (RED_PIECE, RED_PIECE_RIM),
        Side::Blue => (BLUE_PIECE, BLUE_PIECE_RIM),
    }
}
