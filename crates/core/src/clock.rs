//! Drop clock - wall-clock gravity cadence
//!
//! The clock keeps a threshold instant. Each loop iteration asks whether the
//! threshold has passed; when it has, exactly one drop is due and the
//! threshold advances by one interval (`1 / speed` seconds). Advancing from
//! the old threshold rather than from "now" keeps the cadence free of drift
//! when loop iterations run late.

use std::time::{Duration, Instant};

/// Seconds between drops at `speed` rows per second.
pub fn drop_interval(speed: f64) -> Duration {
    if speed.is_finite() && speed > 0.0 {
        Duration::from_secs_f64(1.0 / speed)
    } else {
        Duration::MAX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    /// `None` when the interval does not fit in an `Instant` (no drops).
    threshold: Option<Instant>,
}

impl DropClock {
    /// First drop falls one interval after `now`.
    pub fn new(now: Instant, speed: f64) -> Self {
        Self {
            threshold: Self::after(now, speed),
        }
    }

    fn after(t: Instant, speed: f64) -> Option<Instant> {
        t.checked_add(drop_interval(speed))
    }

    /// Instant at which the next drop becomes due.
    pub fn threshold(&self) -> Option<Instant> {
        self.threshold
    }

    /// Returns true when a drop is due at `now`, advancing the threshold by
    /// one interval at the current speed. At most one drop per call.
    pub fn is_due(&mut self, now: Instant, speed: f64) -> bool {
        match self.threshold {
            Some(threshold) if now >= threshold => {
                self.threshold = Self::after(threshold, speed);
                true
            }
            _ => false,
        }
    }

    /// Re-anchor the clock at `now` (new game).
    pub fn reset(&mut self, now: Instant, speed: f64) {
        self.threshold = Self::after(now, speed);
    }

    /// Time left before the next drop, zero if already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.threshold
            .map_or(Duration::MAX, |t| t.saturating_duration_since(now))
    }
}
