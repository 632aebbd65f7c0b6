//! Time handling for tweens: the `TweenTime` wrapper and the per-tween
//! `Timer`. Nanosecond integers keep comparisons exact and `Ord`-compliant;
//! conversions to seconds happen at the easing boundary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// A non-negative span of tween time.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Serialize, Deserialize, Default)]
pub struct TweenTime(u64); // u64 nanoseconds

impl TweenTime {
    /// Create tween time from nanoseconds
    #[inline]
    pub fn from_nanos(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    /// Create tween time from milliseconds
    #[inline]
    pub fn from_millis(milliseconds: f64) -> Result<Self, TweenError> {
        Self::from_seconds(milliseconds / 1000.0)
    }

    /// Create tween time from seconds
    #[inline]
    pub fn from_seconds(seconds: f64) -> Result<Self, TweenError> {
        if seconds < 0.0 || !seconds.is_finite() {
            return Err(TweenError::InvalidTime { time: seconds });
        }
        Ok(Self((seconds * 1_000_000_000.0) as u64))
    }

    /// Zero time
    #[inline]
    pub fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get time in seconds
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.0 as f64 / 1_000_000_000.0
    }

    /// Get time in milliseconds
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Get time in nanoseconds
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Scale by a non-negative factor; negative or non-finite factors clamp
    /// to zero. Scales the nanosecond count directly so a factor of 1.0 is
    /// an exact identity.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::zero();
        }
        Self((self.0 as f64 * factor) as u64)
    }

    /// Clamp time to a range
    #[inline]
    pub fn clamp(&self, min: TweenTime, max: TweenTime) -> Self {
        if self.0 < min.0 {
            min
        } else if self.0 > max.0 {
            max
        } else {
            *self
        }
    }
}

impl std::ops::Add for TweenTime {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::ops::AddAssign for TweenTime {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::ops::Sub for TweenTime {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::ops::SubAssign for TweenTime {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl From<u64> for TweenTime {
    fn from(nanos: u64) -> Self {
        Self::from_nanos(nanos)
    }
}

impl From<f64> for TweenTime {
    fn from(seconds: f64) -> Self {
        Self::from_seconds(seconds.max(0.0)).unwrap_or_else(|_| Self::zero())
    }
}

impl From<TweenTime> for f64 {
    fn from(time: TweenTime) -> f64 {
        time.as_seconds()
    }
}

impl From<Duration> for TweenTime {
    fn from(duration: Duration) -> Self {
        TweenTime::from_nanos(duration.as_nanos() as u64)
    }
}

impl From<TweenTime> for Duration {
    fn from(time: TweenTime) -> Duration {
        Duration::from_nanos(time.0)
    }
}

/// Accumulates the active time of exactly one tween.
///
/// `advance` only accumulates while running; `stop` freezes without
/// resetting, so elapsed time is monotonically non-decreasing until a
/// `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Timer {
    elapsed: TweenTime,
    running: bool,
}

impl Timer {
    /// Create a stopped timer at zero
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume accumulating
    #[inline]
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Freeze without resetting
    #[inline]
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Rewind to zero; running state is unchanged
    #[inline]
    pub fn reset(&mut self) {
        self.elapsed = TweenTime::zero();
    }

    /// Accumulate a delta; no-op while stopped
    #[inline]
    pub fn advance(&mut self, delta: TweenTime) {
        if self.running {
            self.elapsed += delta;
        }
    }

    /// Force the accumulated time to an exact value
    #[inline]
    pub fn set(&mut self, elapsed: TweenTime) {
        self.elapsed = elapsed;
    }

    /// Accumulated active time
    #[inline]
    pub fn elapsed(&self) -> TweenTime {
        self.elapsed
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_time_conversions() {
        let time = TweenTime::from_seconds(1.5).unwrap();
        assert_eq!(time.as_seconds(), 1.5);
        assert_eq!(time.as_millis(), 1500.0);
        assert_eq!(time.as_nanos(), 1_500_000_000);
    }

    #[test]
    fn test_invalid_time() {
        assert!(TweenTime::from_seconds(-1.0).is_err());
        assert!(TweenTime::from_seconds(f64::NAN).is_err());
        assert!(TweenTime::from_seconds(f64::INFINITY).is_err());
    }

    #[test]
    fn test_saturating_arithmetic() {
        let one = TweenTime::from_seconds(1.0).unwrap();
        let two = TweenTime::from_seconds(2.0).unwrap();
        assert_eq!((one + two).as_seconds(), 3.0);
        assert_eq!((one - two), TweenTime::zero());
    }

    #[test]
    fn test_scale() {
        let one = TweenTime::from_seconds(1.0).unwrap();
        assert_eq!(one.scale(2.0).as_seconds(), 2.0);
        assert_eq!(one.scale(-2.0), TweenTime::zero());
    }

    #[test]
    fn test_timer_accumulates_only_while_running() {
        let mut timer = Timer::new();
        timer.advance(TweenTime::from(0.5));
        assert_eq!(timer.elapsed(), TweenTime::zero());

        timer.start();
        timer.advance(TweenTime::from(0.5));
        timer.advance(TweenTime::from(0.25));
        assert_eq!(timer.elapsed(), TweenTime::from(0.75));

        timer.stop();
        timer.advance(TweenTime::from(1.0));
        assert_eq!(timer.elapsed(), TweenTime::from(0.75));

        timer.start();
        timer.advance(TweenTime::from(0.25));
        assert_eq!(timer.elapsed(), TweenTime::from(1.0));
    }

    #[test]
    fn test_timer_reset_keeps_running_state() {
        let mut timer = Timer::new();
        timer.start();
        timer.advance(TweenTime::from(1.0));
        timer.reset();
        assert!(timer.is_running());
        assert_eq!(timer.elapsed(), TweenTime::zero());
    }
}
