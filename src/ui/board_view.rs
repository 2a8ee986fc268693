//! Board rendering for the Gomoku GUI

use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Geometry of the board within the allocated rect, recomputed per frame
#[derive(Clone, Copy)]
struct Layout {
    /// Screen position of cell (0, 0)
    origin: Pos2,
    /// Distance between adjacent grid intersections
    step: f32,
    /// Full allocated rect, including the margin with the labels
    rect: Rect,
}

impl Layout {
    fn fit(rect: Rect) -> Self {
        let step = (rect.width().min(rect.height()) - 2.0 * BOARD_MARGIN)
            / (BOARD_SIZE as f32 - 1.0);
        Self {
            origin: rect.min + Vec2::splat(BOARD_MARGIN),
            step,
            rect,
        }
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.origin + Vec2::new(pos.col as f32, pos.row as f32) * self.step
    }

    fn cell_at(&self, screen: Pos2) -> Option<Pos> {
        let rel = (screen - self.origin) / self.step;
        let col = rel.x.round() as i32;
        let row = rel.y.round() as i32;
        // Reject clicks in the label margin, more than half a step out
        let snapped = self.origin + Vec2::new(col as f32, row as f32) * self.step;
        if (screen - snapped).length() > self.step * 0.5 || !Pos::is_valid(row, col) {
            return None;
        }
        Some(Pos::new(row as u8, col as u8))
    }

    fn stone_radius(&self) -> f32 {
        self.step * STONE_RADIUS_RATIO
    }
}

/// Board view handles rendering and input for the game board
#[derive(Default)]
pub struct BoardView {
    layout: Option<Layout>,
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Stone,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 5]>,
        game_over: bool,
    ) -> Option<Pos> {
        let side = ui.available_size().min_elem() - 16.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());

        let layout = Layout::fit(response.rect);
        self.layout = Some(layout);

        painter.rect_filled(layout.rect, CornerRadius::same(4), BOARD_WOOD);
        draw_grid_and_stars(&painter, layout);
        draw_labels(&painter, layout);

        for pos in board.occupied() {
            draw_stone(&painter, layout, pos, board.get(pos));
        }
        if let Some(pos) = last_move {
            painter.circle_filled(
                layout.cell_center(pos),
                LAST_MOVE_MARKER_RADIUS,
                LAST_MOVE_MARKER,
            );
        }
        if let Some(line) = winning_line {
            draw_winning_line(&painter, layout, &line);
        }

        if game_over {
            return None;
        }

        let hovered = response
            .hover_pos()
            .and_then(|screen| layout.cell_at(screen));
        if let Some(pos) = hovered {
            let open = board.is_empty(pos);
            draw_hover(&painter, layout, pos, current_turn, open);
            if open && response.clicked() {
                return Some(pos);
            }
        }
        None
    }
}

fn draw_grid_and_stars(painter: &Painter, layout: Layout) {
    let stroke = Stroke::new(GRID_LINE_WIDTH, LINE_COLOR);
    let far = (BOARD_SIZE - 1) as u8;

    for i in 0..BOARD_SIZE as u8 {
        painter.line_segment(
            [
                layout.cell_center(Pos::new(i, 0)),
                layout.cell_center(Pos::new(i, far)),
            ],
            stroke,
        );
        painter.line_segment(
            [
                layout.cell_center(Pos::new(0, i)),
                layout.cell_center(Pos::new(far, i)),
            ],
            stroke,
        );
    }

    for (row, col) in STAR_POINTS {
        painter.circle_filled(
            layout.cell_center(Pos::new(row, col)),
            STAR_POINT_RADIUS,
            STAR_POINT,
        );
    }
}

/// Column letters A-O along the top and bottom, row numbers 15-1 down
/// the sides
fn draw_labels(painter: &Painter, layout: Layout) {
    let font = FontId::proportional(12.0);

    for i in 0..BOARD_SIZE as u8 {
        let letter = (b'A' + i) as char;
        let number = BOARD_SIZE as u8 - i;
        let on_axis = layout.cell_center(Pos::new(i, i));

        for y in [layout.rect.min.y + 10.0, layout.rect.max.y - 10.0] {
            painter.text(
                Pos2::new(on_axis.x, y),
                Align2::CENTER_CENTER,
                letter,
                font.clone(),
                LINE_COLOR,
            );
        }
        for x in [layout.rect.min.x + 12.0, layout.rect.max.x - 12.0] {
            painter.text(
                Pos2::new(x, on_axis.y),
                Align2::CENTER_CENTER,
                number.to_string(),
                font.clone(),
                LINE_COLOR,
            );
        }
    }
}

fn draw_stone(painter: &Painter, layout: Layout, pos: Pos, stone: Stone) {
    let center = layout.cell_center(pos);
    let radius = layout.stone_radius();

    let (fill, shadow_alpha) = match stone {
        Stone::Black => (BLACK_STONE, 60),
        Stone::White => (WHITE_STONE, 40),
        Stone::Empty => return,
    };

    painter.circle_filled(
        center + Vec2::splat(2.0),
        radius,
        Color32::from_rgba_unmultiplied(0, 0, 0, shadow_alpha),
    );
    painter.circle_filled(center, radius, fill);

    // Specular dot on black, rim on white
    match stone {
        Stone::Black => painter.circle_filled(
            center - Vec2::splat(radius * 0.3),
            radius * 0.2,
            BLACK_STONE_SHEEN,
        ),
        Stone::White => painter.circle_stroke(
            center,
            radius * 0.85,
            Stroke::new(radius * 0.1, WHITE_STONE_RIM),
        ),
        Stone::Empty => unreachable!(),
    };
}

fn draw_winning_line(painter: &Painter, layout: Layout, line: &[Pos; 5]) {
    let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);
    painter.line_segment(
        [layout.cell_center(line[0]), layout.cell_center(line[4])],
        stroke,
    );
    for &pos in line {
        painter.circle_stroke(
            layout.cell_center(pos),
            layout.stone_radius() + 3.0,
            stroke,
        );
    }
}

fn draw_hover(painter: &Painter, layout: Layout, pos: Pos, turn: Stone, open: bool) {
    let color = match (open, turn) {
        (true, Stone::Black) => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
        (true, Stone::White) => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        (true, Stone::Empty) => return,
        // Occupied cell under the cursor
        (false, _) => Color32::from_rgba_unmultiplied(255, 50, 50, 100),
    };
    painter.circle_filled(layout.cell_center(pos), layout.stone_radius(), color);
}
