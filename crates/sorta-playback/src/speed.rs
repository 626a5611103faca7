//! Playback speed multiplier.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay between auto-advance ticks at 1x.
pub const BASE_DELAY: Duration = Duration::from_millis(500);

/// Playback speed multiplier, clamped to `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    pub const MIN: f64 = 0.25;
    pub const MAX: f64 = 100.0;

    /// 0.25x speed
    pub const QUARTER: Self = Self(0.25);
    /// 0.5x speed
    pub const HALF: Self = Self(0.5);
    /// Normal speed (1x)
    pub const NORMAL: Self = Self(1.0);
    /// 2x speed
    pub const DOUBLE: Self = Self(2.0);
    /// 4x speed
    pub const QUADRUPLE: Self = Self(4.0);
    /// 10x speed
    pub const TEN_X: Self = Self(10.0);
    /// Fastest supported speed (100x)
    pub const MAXIMUM: Self = Self(Self::MAX);

    /// Clamp `multiplier` into range. Non-finite and non-positive values
    /// become `MIN`.
    pub fn new(multiplier: f64) -> Self {
        if !multiplier.is_finite() {
            return Self(Self::MIN);
        }
        Self(multiplier.clamp(Self::MIN, Self::MAX))
    }

    /// Get the speed multiplier.
    pub fn multiplier(&self) -> f64 {
        self.0
    }

    /// Delay between ticks: `base / multiplier`.
    pub fn delay(&self, base: Duration) -> Duration {
        base.div_f64(self.0)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<f64> for PlaybackSpeed {
    fn from(multiplier: f64) -> Self {
        Self::new(multiplier)
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> Self {
        speed.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_multipliers() {
        assert_eq!(PlaybackSpeed::QUARTER.multiplier(), 0.25);
        assert_eq!(PlaybackSpeed::NORMAL.multiplier(), 1.0);
        assert_eq!(PlaybackSpeed::DOUBLE.multiplier(), 2.0);
        assert_eq!(PlaybackSpeed::MAXIMUM.multiplier(), 100.0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(PlaybackSpeed::new(0.0), PlaybackSpeed::QUARTER);
        assert_eq!(PlaybackSpeed::new(-3.0), PlaybackSpeed::QUARTER);
        assert_eq!(PlaybackSpeed::new(f64::NAN), PlaybackSpeed::QUARTER);
        assert_eq!(PlaybackSpeed::new(1e9), PlaybackSpeed::MAXIMUM);
        assert_eq!(PlaybackSpeed::new(f64::INFINITY), PlaybackSpeed::QUARTER);
        assert_eq!(PlaybackSpeed::new(f64::NEG_INFINITY), PlaybackSpeed::QUARTER);
        assert_eq!(PlaybackSpeed::new(3.0).multiplier(), 3.0);
    }

    #[test]
    fn delay_scales_inversely() {
        assert_eq!(PlaybackSpeed::NORMAL.delay(BASE_DELAY), Duration::from_millis(500));
        assert_eq!(PlaybackSpeed::DOUBLE.delay(BASE_DELAY), Duration::from_millis(250));
        assert_eq!(PlaybackSpeed::QUARTER.delay(BASE_DELAY), Duration::from_millis(2000));
        assert_eq!(PlaybackSpeed::MAXIMUM.delay(BASE_DELAY), Duration::from_millis(5));
    }

    #[test]
    fn deserialization_clamps() {
        let speed: PlaybackSpeed = serde_json::from_str("500").unwrap();
        assert_eq!(speed, PlaybackSpeed::MAXIMUM);
    }
}
