//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the input mapping and the terminal renderer alike.
//!
//! # Coordinates
//!
//! Every position is a `(row, col)` pair. Row 0 is the top of the board and
//! rows grow downward; column 0 is the left wall side.
//!
//! # Default Board
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_HEIGHT` | 16 | Rows in the playfield |
//! | `BOARD_WIDTH` | 10 | Columns in the playfield |
//! | `SPAWN_ROW` | 1 | Pivot row of a freshly spawned piece |
//! | `SPAWN_COL` | 5 | Pivot column of a freshly spawned piece |
//! | `PREVIEW_SIDE` | 7 | Side of the square "next piece" box |
//!
//! # Speed Curve
//!
//! Pieces fall `INITIAL_SPEED` rows per second, and the speed grows by
//! `SPEED_INCREMENT` for every `SCORE_STEP` points accumulated.
//!
//! # Examples
//!
//! ```
//! use tetrodrop_types::{Collision, GameAction, Shape, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Shape::T.as_str(), "T");
//! assert_eq!(Shape::O.num_states(), 1);
//! assert!(Collision::None.is_free());
//! assert_eq!(GameAction::Rotate.as_str(), "rotate");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Pivot row used when a piece enters the board.
///
/// Every template orientation reaches at most one row above its pivot, so a
/// spawn row of 1 keeps all cells on the board.
pub const SPAWN_ROW: i32 = 1;

/// Pivot column used when a piece enters the board.
pub const SPAWN_COL: i32 = BOARD_WIDTH as i32 / 2;

/// Side length of the square preview box for the next piece.
pub const PREVIEW_SIDE: u8 = 7;

/// Pivot row of the next piece inside the preview box.
pub const PREVIEW_ROW: i32 = PREVIEW_SIDE as i32 / 2 - 1;

/// Pivot column of the next piece inside the preview box.
pub const PREVIEW_COL: i32 = PREVIEW_SIDE as i32 / 2;

/// Number of cells in every piece.
pub const PIECE_CELLS: usize = 4;

/// Most rows a single lock can complete.
pub const MAX_CLEARED_ROWS: usize = 4;

/// Drop rate at score 0 (rows per second).
pub const INITIAL_SPEED: f64 = 1.0;

/// Speed gained for each completed score step.
pub const SPEED_INCREMENT: f64 = 1.0 / 3.0;

/// Points required for each speed step.
pub const SCORE_STEP: u64 = 1500;

/// Base points awarded per line-clear batch (scaled by the clear size).
pub const LINE_CLEAR_BASE: u64 = 100;

/// Extra multiplier units granted for a four-row clear.
pub const FOUR_ROW_BONUS: u64 = 4;

/// Number of tracked high-score entries.
pub const RANKING_SLOTS: usize = 10;

/// Length of a ranking name (player initials).
pub const NAME_LEN: usize = 3;

/// Placeholder name used for empty ranking slots.
pub const DEFAULT_NAME: &str = "AAA";

/// The seven tetromino shapes
///
/// Each shape has a fixed template and a fixed number of rotation states:
/// - **I**: straight line, 2 states
/// - **J**, **L**: hooked bars, 4 states
/// - **S**, **Z**: skewed pairs, 2 states
/// - **O**: 2x2 square, 1 state (never rotates)
/// - **T**: T-shaped, 4 states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    S,
    Z,
    O,
    T,
}

impl Shape {
    /// All shapes in canonical order.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::S,
        Shape::Z,
        Shape::O,
        Shape::T,
    ];

    /// Number of distinct orientations this shape cycles through.
    pub fn num_states(self) -> u8 {
        match self {
            Shape::O => 1,
            Shape::I | Shape::S | Shape::Z => 2,
            Shape::J | Shape::L | Shape::T => 4,
        }
    }

    /// Uppercase letter used in logs and text views.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
            Shape::S => "S",
            Shape::Z => "Z",
            Shape::O => "O",
            Shape::T => "T",
        }
    }
}

/// Result of checking a cell (or a whole piece) against the board.
///
/// Checks are ordered: walls first, then the floor, then locked cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The position is free.
    None,
    /// Column left of 0 or right of the last column.
    Wall,
    /// Row below the last board row.
    Floor,
    /// The cell is already occupied by a locked block.
    Locked,
}

impl Collision {
    /// `true` when nothing blocks the position.
    pub fn is_free(self) -> bool {
        self == Collision::None
    }
}

/// Requests forwarded from the player to the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks it)
    SoftDrop,
    /// Advance the piece to its next rotation state
    Rotate,
}

impl GameAction {
    /// Name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Choices available on the title, rankings and game-over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Scores,
    Title,
    Quit,
}

/// Keys understood by the initials editor shown after a top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialsKey {
    /// Next letter at the cursor
    Up,
    /// Previous letter at the cursor
    Down,
    Left,
    Right,
    /// Accept the name
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_speed_curve() {
        assert_eq!(INITIAL_SPEED, 1.0);
        assert!((SPEED_INCREMENT - 1.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(SCORE_STEP, 1500);
    }

    #[test]
    fn spawn_and_preview_defaults() {
        assert_eq!(SPAWN_ROW, 1);
        assert_eq!(SPAWN_COL, 5);
        assert_eq!((PREVIEW_ROW, PREVIEW_COL), (2, 3));
    }

    #[test]
    fn num_states_per_shape() {
        let states: Vec<u8> = Shape::ALL.iter().map(|s| s.num_states()).collect();
        assert_eq!(states, vec![2, 4, 4, 2, 2, 1, 4]);
    }

    #[test]
    fn shape_letters_are_distinct() {
        let letters: Vec<&str> = Shape::ALL.iter().map(Shape::as_str).collect();
        assert_eq!(letters, vec!["I", "J", "L", "S", "Z", "O", "T"]);
    }
}
