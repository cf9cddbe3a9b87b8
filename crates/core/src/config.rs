//! Game configuration and its validation.

use thiserror::Error;

use crate::piece::Piece;
use crate::scoring::SpeedCurve;
use crate::types::{
    Shape, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_COL, PREVIEW_ROW, PREVIEW_SIDE, SPAWN_COL, SPAWN_ROW,
};

/// Largest accepted board dimension.
pub const MAX_DIMENSION: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board dimensions {height}x{width} must be between 1 and {max}")]
    Dimensions {
        height: usize,
        width: usize,
        max: usize,
    },
    #[error("{shape:?} does not fit at {area} pivot ({row}, {col})")]
    PivotOutOfBounds {
        area: &'static str,
        shape: Shape,
        row: i32,
        col: i32,
    },
    #[error("initial speed must be a positive number, got {0}")]
    InitialSpeed(f64),
    #[error("speed increment must be a non-negative number, got {0}")]
    SpeedIncrement(f64),
    #[error("score step must be greater than zero")]
    ScoreStep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub spawn_row: i32,
    pub spawn_col: i32,
    /// Pivot of the next piece inside the square preview box.
    pub preview_row: i32,
    pub preview_col: i32,
    pub speed: SpeedCurve,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: BOARD_HEIGHT as usize,
            width: BOARD_WIDTH as usize,
            spawn_row: SPAWN_ROW,
            spawn_col: SPAWN_COL,
            preview_row: PREVIEW_ROW,
            preview_col: PREVIEW_COL,
            speed: SpeedCurve::default(),
        }
    }
}

impl GameConfig {
    /// A board of the given size with the spawn pivot centred on row 1.
    pub fn with_board(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            spawn_col: (width / 2) as i32,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims_ok = |d: usize| (1..=MAX_DIMENSION).contains(&d);
        if !dims_ok(self.height) || !dims_ok(self.width) {
            return Err(ConfigError::Dimensions {
                height: self.height,
                width: self.width,
                max: MAX_DIMENSION,
            });
        }

        check_pivot(
            "spawn",
            self.spawn_row,
            self.spawn_col,
            self.height as i32,
            self.width as i32,
        )?;
        let side = PREVIEW_SIDE as i32;
        check_pivot("preview", self.preview_row, self.preview_col, side, side)?;

        let speed = &self.speed;
        if !speed.initial.is_finite() || speed.initial <= 0.0 {
            return Err(ConfigError::InitialSpeed(speed.initial));
        }
        if !speed.increment.is_finite() || speed.increment < 0.0 {
            return Err(ConfigError::SpeedIncrement(speed.increment));
        }
        if speed.score_step == 0 {
            return Err(ConfigError::ScoreStep);
        }
        Ok(())
    }
}

/// Every orientation of every shape must fit inside `height` x `width` when
/// its pivot sits at `(row, col)`. Pivots only ever move down or sideways
/// under collision checks, so this keeps every cell at a non-negative row.
fn check_pivot(
    area: &'static str,
    row: i32,
    col: i32,
    height: i32,
    width: i32,
) -> Result<(), ConfigError> {
    for shape in Shape::ALL {
        let mut piece = Piece::spawn(shape, row, col);
        for _ in 0..shape.num_states() {
            let fits = piece
                .cells()
                .iter()
                .all(|p| (0..height).contains(&p.row) && (0..width).contains(&p.col));
            if !fits {
                return Err(ConfigError::PivotOutOfBounds {
                    area,
                    shape,
                    row,
                    col,
                });
            }
            piece = piece.rotated();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_with_board_centres_spawn() {
        let config = GameConfig::with_board(20, 12);
        assert_eq!(config.spawn_col, 6);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = GameConfig::with_board(0, 10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Dimensions { height: 0, .. })
        ));
    }

    #[test]
    fn test_spawn_row_zero_rejected() {
        let config = GameConfig {
            spawn_row: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PivotOutOfBounds { area: "spawn", .. })
        ));
    }

    #[test]
    fn test_narrow_board_rejected() {
        // Horizontal I needs four columns.
        let config = GameConfig::with_board(16, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_speed_validation() {
        let mut config = GameConfig::default();
        config.speed.initial = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InitialSpeed(0.0)));

        let mut config = GameConfig::default();
        config.speed.increment = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::SpeedIncrement(-1.0)));

        let mut config = GameConfig::default();
        config.speed.score_step = 0;
        assert_eq!(config.validate(), Err(ConfigError::ScoreStep));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::Dimensions {
            height: 0,
            width: 10,
            max: MAX_DIMENSION,
        };
        assert_eq!(
            err.to_string(),
            "board dimensions 0x10 must be between 1 and 255"
        );
    }
}
