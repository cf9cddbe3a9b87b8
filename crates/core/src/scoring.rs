//! Scoring module - line-clear rewards and the speed curve
//!
//! Both functions are pure. A clear of `n` rows is worth
//! `100 * (2^n / 2 + bonus)` where the bonus only applies to a four-row clear:
//!
//! | Rows | Points |
//! |------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 200 |
//! | 3 | 400 |
//! | 4 | 1200 |
//!
//! Speed is piecewise constant in the score: it starts at the curve's initial
//! value and gains one increment for every full score step accumulated.

use crate::types::{
    FOUR_ROW_BONUS, INITIAL_SPEED, LINE_CLEAR_BASE, MAX_CLEARED_ROWS, SCORE_STEP, SPEED_INCREMENT,
};

/// Points for clearing `lines` rows with a single lock.
///
/// Values above four cannot come from one piece and are clamped to four.
pub fn score_from_lines(lines: usize) -> u64 {
    let n = lines.min(MAX_CLEARED_ROWS) as u32;
    let bonus = if n == MAX_CLEARED_ROWS as u32 {
        FOUR_ROW_BONUS
    } else {
        0
    };
    LINE_CLEAR_BASE * ((1u64 << n) / 2 + bonus)
}

/// Drop speed (rows per second) as a function of score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedCurve {
    /// Speed at score 0
    pub initial: f64,
    /// Speed added per completed step
    pub increment: f64,
    /// Points per step
    pub score_step: u64,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            initial: INITIAL_SPEED,
            increment: SPEED_INCREMENT,
            score_step: SCORE_STEP,
        }
    }
}

impl SpeedCurve {
    pub fn speed_from_score(&self, score: u64) -> f64 {
        let steps = score.checked_div(self.score_step).unwrap_or(0);
        self.initial + steps as f64 * self.increment
    }
}

/// Speed for `score` on the default curve.
pub fn speed_from_score(score: u64) -> f64 {
    SpeedCurve::default().speed_from_score(score)
}
