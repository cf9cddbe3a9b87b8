//! Board module - manages the occupancy grid
//!
//! The board is a `height` x `width` grid of booleans stored as one flat,
//! row-major buffer. Coordinates are `(row, col)` with row 0 at the top.
//! Removing a row is a `copy_within` of the rows above it, so the buffer is
//! allocated once per game and never reshaped.

use arrayvec::ArrayVec;

use crate::piece::{Piece, Point};
use crate::types::{Collision, MAX_CLEARED_ROWS};

/// Result of one [`Board::clear_and_compact`] call.
///
/// `len` is the number of rows removed. The row indices are kept for the
/// first [`MAX_CLEARED_ROWS`] removals only, which covers anything a single
/// locked piece can complete. Indices are positions at the moment of
/// removal; repeated values mean the rows above shifted into an index that
/// was then cleared again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearedRows {
    count: usize,
    rows: ArrayVec<usize, MAX_CLEARED_ROWS>,
}

impl ClearedRows {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, row: usize) {
        self.count += 1;
        // Past the cap only the count grows.
        let _ = self.rows.try_push(row);
    }

    /// Total rows removed.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removal positions, in order, truncated to [`MAX_CLEARED_ROWS`].
    pub fn as_slice(&self) -> &[usize] {
        &self.rows
    }
}

/// The playfield occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    filled: Vec<bool>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are validated by [`crate::GameConfig::validate`]; a zero
    /// dimension produces an empty board where every position collides.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            filled: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Whether the cell at `(row, col)` holds a locked block.
    /// Out-of-range positions read as unoccupied.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some_and(|i| self.filled[i])
    }

    /// Mark a single cell. Returns false if the position is off the board.
    pub fn set(&mut self, row: i32, col: i32, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.filled[i] = occupied;
                true
            }
            None => false,
        }
    }

    /// Classify a single point against walls, floor and locked cells.
    ///
    /// Wall and floor checks run before the occupancy lookup, so the lookup
    /// never leaves the grid. Points above the board are treated as open.
    pub fn classify(&self, p: Point) -> Collision {
        debug_assert!(p.row >= 0, "piece cell above the board: {:?}", p);

        if p.col < 0 || p.col >= self.width as i32 {
            Collision::Wall
        } else if p.row >= self.height as i32 {
            Collision::Floor
        } else if self.is_occupied(p.row, p.col) {
            Collision::Locked
        } else {
            Collision::None
        }
    }

    /// First non-free classification among the piece's cells, in cell order.
    pub fn classify_piece(&self, piece: &Piece) -> Collision {
        piece
            .cells()
            .iter()
            .map(|&p| self.classify(p))
            .find(|c| !c.is_free())
            .unwrap_or(Collision::None)
    }

    /// Transfer the piece's cells into the grid.
    ///
    /// The caller must have checked that the piece classifies as free.
    pub fn lock(&mut self, piece: &Piece) {
        for p in piece.cells() {
            let placed = self.set(p.row, p.col, true);
            debug_assert!(placed, "locked cell off the board: {:?}", p);
        }
    }

    /// Check if a row is completely filled
    pub fn row_is_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        let start = row * self.width;
        self.filled[start..start + self.width].iter().all(|&c| c)
    }

    /// Remove `row` and shift every row above it down by one, leaving an
    /// empty row at the top.
    fn remove_row(&mut self, row: usize) {
        let width = self.width;
        // Rows 0..row move to 1..=row in one overlapping copy.
        self.filled.copy_within(0..row * width, width);
        self.filled[..width].fill(false);
    }

    /// Clear full rows between `bottom_row` and `top_row` (inclusive).
    ///
    /// Scans upward from `bottom_row`. When a full row is removed, the rows
    /// above have shifted into the same index, so it is examined again; the
    /// scan only moves up past rows that were not full. The number of
    /// examinations equals the size of the range, which is exactly enough
    /// because locking a piece can only complete rows that it spans.
    pub fn clear_and_compact(&mut self, bottom_row: usize, top_row: usize) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        if self.height == 0 || bottom_row < top_row {
            return cleared;
        }

        let bottom_row = bottom_row.min(self.height - 1);
        let mut row = bottom_row as isize;
        for _ in top_row..=bottom_row {
            if row < 0 {
                break;
            }
            let r = row as usize;
            if self.row_is_full(r) {
                self.remove_row(r);
                cleared.push(r);
            } else {
                row -= 1;
            }
        }

        if cleared.len() > MAX_CLEARED_ROWS {
            tracing::debug!(
                rows = cleared.len(),
                "wide clear; only the first removals are listed"
            );
        }
        cleared
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.filled.iter().filter(|&&c| c).count()
    }

    /// One row of cells, left to right, or `None` past the bottom.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.filled[start..start + self.width])
    }
}
