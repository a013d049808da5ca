//! Shared constants and the simulation clock.

use bevy::prelude::*;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 TT)
/// Note: This is approximate; TT differs from UTC by leap seconds
pub const J2000_UNIX: i64 = 946728000;

/// Time scale that advances one simulated second per real second.
pub const REAL_TIME_SCALE: f64 = 1.0 / SECONDS_PER_DAY;

/// Fastest allowed time scale (sim-days per real second).
pub const MAX_TIME_SCALE: f64 = 1000.0;

/// Simulation clock, in days since the J2000 epoch.
#[derive(Resource, Clone, Debug)]
pub struct SimulationTime {
    /// Current time in days since J2000
    pub days: f64,
    /// Simulated days per real second
    pub scale: f64,
    /// Whether the clock is stopped
    pub paused: bool,
}

impl Default for SimulationTime {
    fn default() -> Self {
        Self::at_j2000_days(current_j2000_days())
    }
}

impl SimulationTime {
    /// Clock starting at a specific day, running in real time.
    pub fn at_j2000_days(days: f64) -> Self {
        Self {
            days,
            scale: REAL_TIME_SCALE,
            paused: false,
        }
    }

    /// Advance by `real_seconds` of wall-clock time, honouring pause and scale.
    pub fn advance(&mut self, real_seconds: f64) {
        if self.paused {
            return;
        }
        self.days += real_seconds * self.scale;
    }

    /// Double the time scale, up to [`MAX_TIME_SCALE`].
    pub fn speed_up(&mut self) {
        self.scale = (self.scale * 2.0).min(MAX_TIME_SCALE);
    }

    /// Halve the time scale, down to real time.
    pub fn slow_down(&mut self) {
        self.scale = (self.scale * 0.5).max(REAL_TIME_SCALE);
    }
}

/// Convert Unix timestamp to days since J2000 epoch
pub fn unix_to_j2000_days(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64 / SECONDS_PER_DAY
}

/// Get current time as days since J2000 (using system clock).
///
/// A clock set before 1970 reads as the epoch itself.
pub fn current_j2000_days() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => unix_to_j2000_days(elapsed.as_secs() as i64),
        Err(_) => 0.0,
    }
}
