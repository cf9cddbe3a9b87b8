//! Pieces module - tetromino geometry and movement
//!
//! Every shape is one [`Piece`] value parameterised by a [`Shape`] tag and a
//! fixed template of four cell offsets around a pivot. Rotation is a 90° turn
//! of each cell about the pivot; there are no wall kicks, so a rotation that
//! collides is rejected outright.
//!
//! Moves are atomic: a full candidate piece is built first, checked against
//! the board, and only then committed.

use crate::board::Board;
use crate::types::{Shape, PIECE_CELLS};

/// A `(row, col)` position. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Turn this point 90° about `center`.
    ///
    /// With sign `s` (+1 clockwise, -1 counter-clockwise) a point `(y, x)`
    /// maps to `(cy + s*(x - cx), cx - s*(y - cy))`.
    pub fn rotate_about(self, center: Point, clockwise: bool) -> Self {
        let s = if clockwise { 1 } else { -1 };
        Self::new(
            center.row + s * (self.col - center.col),
            center.col - s * (self.row - center.row),
        )
    }
}

/// Extremal rows and columns of a piece's cells (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl BoundingBox {
    fn of(cells: &[Point; PIECE_CELLS]) -> Self {
        let mut bbox = BoundingBox {
            min_row: cells[0].row,
            max_row: cells[0].row,
            min_col: cells[0].col,
            max_col: cells[0].col,
        };
        for p in &cells[1..] {
            bbox.min_row = bbox.min_row.min(p.row);
            bbox.max_row = bbox.max_row.max(p.row);
            bbox.min_col = bbox.min_col.min(p.col);
            bbox.max_col = bbox.max_col.max(p.col);
        }
        bbox
    }
}

/// Cell offsets of a shape around a pivot at the origin, in spawn orientation.
pub fn template(shape: Shape) -> [Point; PIECE_CELLS] {
    const fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }
    match shape {
        Shape::I => [p(-1, 0), p(0, 0), p(1, 0), p(2, 0)],
        Shape::J => [p(-1, 0), p(0, 0), p(1, 0), p(1, 1)],
        Shape::L => [p(-1, 0), p(0, 0), p(1, 0), p(1, -1)],
        Shape::S => [p(1, -1), p(1, 0), p(0, 0), p(0, 1)],
        Shape::Z => [p(0, -1), p(0, 0), p(1, 0), p(1, 1)],
        Shape::O => [p(-1, -1), p(-1, 0), p(0, -1), p(0, 0)],
        Shape::T => [p(0, -1), p(0, 0), p(0, 1), p(-1, 0)],
    }
}

/// A falling tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: Shape,
    cells: [Point; PIECE_CELLS],
    center: Point,
    bbox: BoundingBox,
    rotation_state: u8,
}

impl Piece {
    /// Build a piece from its template and move its pivot to `(row, col)`.
    pub fn spawn(shape: Shape, row: i32, col: i32) -> Self {
        let cells = template(shape);
        let mut piece = Self {
            shape,
            cells,
            center: Point::default(),
            bbox: BoundingBox::of(&cells),
            rotation_state: 0,
        };
        piece.reposition(row, col);
        piece
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Current cell coordinates, in template order.
    pub fn cells(&self) -> &[Point; PIECE_CELLS] {
        &self.cells
    }

    /// Rotation pivot.
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn rotation_state(&self) -> u8 {
        self.rotation_state
    }

    pub fn num_states(&self) -> u8 {
        self.shape.num_states()
    }

    /// Refresh the cached bounding box from the current cells.
    pub fn recompute_bounding_box(&mut self) {
        self.bbox = BoundingBox::of(&self.cells);
    }

    /// Move the pivot to `(row, col)` without any collision check.
    ///
    /// Used to place a piece at spawn and to promote the preview piece onto
    /// the board; the caller decides whether the new location is legal.
    pub fn reposition(&mut self, row: i32, col: i32) {
        let d_row = row - self.center.row;
        let d_col = col - self.center.col;
        for cell in &mut self.cells {
            *cell = cell.offset(d_row, d_col);
        }
        self.center = Point::new(row, col);
        self.recompute_bounding_box();
    }

    /// Candidate piece shifted by `(d_row, d_col)`, not yet checked.
    pub fn translated(&self, d_row: i32, d_col: i32) -> Piece {
        let mut next = *self;
        for cell in &mut next.cells {
            *cell = cell.offset(d_row, d_col);
        }
        next.center = next.center.offset(d_row, d_col);
        next.recompute_bounding_box();
        next
    }

    /// Direction of the next rotation.
    ///
    /// Two-state shapes turn back the way they came from state 1, so they
    /// alternate between their two orientations instead of drifting.
    fn next_turn_is_clockwise(&self) -> bool {
        !(self.num_states() == 2 && self.rotation_state == 1)
    }

    /// Candidate piece in the next rotation state, not yet checked.
    pub fn rotated(&self) -> Piece {
        let states = self.num_states();
        if states == 1 {
            return *self;
        }

        let clockwise = self.next_turn_is_clockwise();
        let mut next = *self;
        for cell in &mut next.cells {
            *cell = cell.rotate_about(self.center, clockwise);
        }
        next.rotation_state = (self.rotation_state + 1) % states;
        next.recompute_bounding_box();
        next
    }

    /// Shift the piece if the destination is free. Returns whether it moved.
    pub fn translate(&mut self, board: &Board, d_row: i32, d_col: i32) -> bool {
        self.commit_if_free(board, self.translated(d_row, d_col))
    }

    /// Turn the piece to its next rotation state if the result is free.
    ///
    /// Shapes with a single state never change and always report success.
    pub fn rotate(&mut self, board: &Board) -> bool {
        if self.num_states() == 1 {
            return true;
        }
        self.commit_if_free(board, self.rotated())
    }

    fn commit_if_free(&mut self, board: &Board, candidate: Piece) -> bool {
        if board.classify_piece(&candidate).is_free() {
            *self = candidate;
            true
        } else {
            false
        }
    }
}
