//! GameView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) so layouts can be unit-tested.

use crate::core::{Game, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Shape, PREVIEW_SIDE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub(crate) const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
pub(crate) const WELL: Rgb = Rgb::new(30, 30, 40);

pub(crate) fn label_style() -> CellStyle {
    CellStyle::plain(Rgb::new(220, 220, 220), BACKGROUND).bold()
}

pub(crate) fn value_style() -> CellStyle {
    CellStyle::plain(Rgb::new(200, 200, 200), BACKGROUND)
}

fn wall_style() -> CellStyle {
    CellStyle::plain(Rgb::new(150, 150, 160), Rgb::new(60, 60, 70))
}

/// Display colour of a shape.
pub fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::J => Rgb::new(80, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
        Shape::S => Rgb::new(100, 220, 120),
        Shape::Z => Rgb::new(220, 80, 80),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
    }
}

/// Where the board frame landed on screen, walls and floor included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFrame {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Renders the playfield, the preview box and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render `game` into an existing framebuffer, resizing it to the
    /// viewport. Returns the board frame; the game-over and initials popups
    /// are centred on it.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) -> BoardFrame {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board = game.board();
        let well_w = board.width() as u16 * self.cell_w;
        let well_h = board.height() as u16;
        let preview_w = PREVIEW_SIDE as u16 * self.cell_w + 2;

        let frame = BoardFrame {
            x: viewport
                .width
                .saturating_sub(well_w + 2 + 2 + preview_w)
                / 2,
            y: viewport.height.saturating_sub(well_h + 2) / 2,
            width: well_w + 2,
            height: well_h + 2,
        };

        // Walls and floor.
        let wall = wall_style();
        fb.fill_rect(frame.x, frame.y, frame.width, frame.height, '▒', wall);

        let empty = CellStyle::plain(Rgb::new(90, 90, 100), WELL).dim();
        let locked = CellStyle::plain(Rgb::new(170, 170, 180), WELL);
        for row in 0..board.height() {
            for col in 0..board.width() {
                let (ch, style) = if board.is_occupied(row as i32, col as i32) {
                    ('█', locked)
                } else {
                    ('·', empty)
                };
                self.fill_cell(fb, frame.x + 1, frame.y + 1, row as i32, col as i32, ch, style);
            }
        }

        let board_h = board.height() as i32;
        let board_w = board.width() as i32;
        self.draw_piece(fb, frame.x + 1, frame.y + 1, game.active(), board_h, board_w, WELL);

        let panel_x = frame.x + frame.width + 2;
        self.draw_preview(fb, panel_x, frame.y, game.next());

        let mut y = frame.y + PREVIEW_SIDE as u16 + 3;
        fb.put_str(panel_x, y, "SCORE", label_style());
        y += 1;
        fb.put_str(panel_x, y, &format_score(game.score()), value_style());
        y += 2;
        fb.put_str(panel_x, y, "SPEED", label_style());
        y += 1;
        fb.put_str(panel_x, y, &format!("{:.2}x", game.speed()), value_style());

        frame
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: &Piece) {
        let side = PREVIEW_SIDE as u16;
        let inner_w = side * self.cell_w;
        fb.draw_box(x, y, inner_w + 2, side + 2, wall_style());
        fb.fill_rect(x + 1, y + 1, inner_w, side, ' ', CellStyle::plain(WELL, WELL));
        fb.put_str(x + 2, y, "NEXT", label_style());

        let side = side as i32;
        self.draw_piece(fb, x + 1, y + 1, next, side, side, WELL);
    }

    /// Cells outside `height` x `width` are skipped.
    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        piece: &Piece,
        height: i32,
        width: i32,
        bg: Rgb,
    ) {
        let style = CellStyle::plain(shape_color(piece.shape()), bg).bold();
        for p in piece.cells() {
            if (0..height).contains(&p.row) && (0..width).contains(&p.col) {
                self.fill_cell(fb, origin_x, origin_y, p.row, p.col, '█', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: i32,
        col: i32,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin_x + col as u16 * self.cell_w;
        let py = origin_y + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

/// Scores are shown as ten zero-padded digits.
pub fn format_score(score: u64) -> String {
    format!("{:010}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn count(fb: &FrameBuffer, ch: char) -> usize {
        fb.to_text().chars().filter(|&c| c == ch).count()
    }

    #[test]
    fn test_format_score_pads() {
        assert_eq!(format_score(0), "0000000000");
        assert_eq!(format_score(1200), "0000001200");
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(GameConfig::default(), 9).unwrap();
        let view = GameView::default();
        let mut fb = FrameBuffer::new(1, 1);
        let frame = view.render_into(&game, Viewport::new(80, 24), &mut fb);

        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!((frame.width, frame.height), (22, 18));

        let text = fb.to_text();
        assert!(text.contains("SCORE"));
        assert!(text.contains("0000000000"));
        assert!(text.contains("1.00x"));
        assert!(text.contains("NEXT"));

        // Active piece and preview piece, two columns per cell.
        assert_eq!(count(&fb, '█'), 16);
        // Empty well cells minus the four under the active piece.
        assert_eq!(count(&fb, '·'), (160 - 4) * 2);
    }

    #[test]
    fn test_locked_cells_drawn() {
        let mut game = Game::new(GameConfig::default(), 4).unwrap();
        while game.tick() == crate::core::TickOutcome::Moved {}

        let fb = GameView::default().render(&game, Viewport::new(80, 24));
        // Locked piece, new active piece and preview.
        assert_eq!(count(&fb, '█'), 24);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let game = Game::new(GameConfig::default(), 1).unwrap();
        let fb = GameView::default().render(&game, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
