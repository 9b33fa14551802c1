//! Board rendering for the GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Move, Pos, Side};

use super::theme::*;

/// Highlights drawn on top of the pieces
#[derive(Default)]
pub struct Overlay<'a> {
    pub selected: Option<Pos>,
    pub hints: &'a [Pos],
    pub last_move: Option<Move>,
    pub winning_line: Option<&'a [Pos]>,
    /// Accept clicks
    pub interactive: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Cells in one row of the board being drawn
    size: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            size: 5,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_px = available_size.x.min(available_size.y) - 20.0;
        self.size = board.size();
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_cells(&painter);

        if let Some(mv) = overlay.last_move {
            self.draw_last_move(&painter, mv);
        }
        self.draw_pieces(&painter, board);

        if let Some(pos) = overlay.selected {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
            painter.circle_stroke(self.cell_center(pos), radius, Stroke::new(3.0, SELECTION));
        }
        for &pos in overlay.hints {
            painter.circle_filled(self.cell_center(pos), self.cell_size * HINT_RADIUS_RATIO, hint_dot());
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let mut clicked = None;
        if overlay.interactive {
            if let Some(cell) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                painter.rect_filled(self.cell_rect(cell), CornerRadius::ZERO, hover_cell());
                if response.clicked() {
                    clicked = Some(cell);
                }
            }
        }
        clicked
    }

    /// Checkered cells with grid lines
    fn draw_cells(&self, painter: &Painter) {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Pos::new(row as u8, col as u8);
                let fill = if (row + col) % 2 == 0 { CELL_LIGHT } else { CELL_DARK };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, fill);
            }
        }

        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let span = self.cell_size * self.size as f32;
        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment([origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)], stroke);
            painter.line_segment([origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)], stroke);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for side in Side::ALL {
            for piece in board.pieces(side) {
                if let Some(pos) = piece.pos() {
                    self.draw_piece(painter, self.cell_center(pos), side, piece.kind().glyph(), self.cell_size);
                }
            }
        }
    }

    /// Disc in the side's colour with the kind's glyph
    pub fn draw_piece(&self, painter: &Painter, center: Pos2, side: Side, glyph: char, cell: f32) {
        let radius = cell * PIECE_RADIUS_RATIO;
        let (fill, rim) = side_colors(side);

        painter.circle_filled(center + Vec2::splat(2.0), radius, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 50));
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius, Stroke::new(2.0, rim));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(radius * 1.1),
            PIECE_GLYPH,
        );
    }

    /// Outline the source and destination cells of the last move
    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        let stroke = Stroke::new(2.5, LAST_MOVE_MARKER);
        if let Some(from) = mv.from {
            painter.circle_stroke(self.cell_center(from), self.cell_size * 0.15, stroke);
            painter.line_segment([self.cell_center(from), self.cell_center(mv.to)], Stroke::new(1.5, LAST_MOVE_MARKER));
        }
        painter.rect_stroke(self.cell_rect(mv.to).shrink(2.0), CornerRadius::same(3), stroke, egui::StrokeKind::Inside);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }
        for &pos in line {
            let radius = self.cell_size * PIECE_RADIUS_RATIO + 3.0;
            painter.circle_stroke(self.cell_center(pos), radius, stroke);
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert board position to screen coordinates (cell centre)
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
