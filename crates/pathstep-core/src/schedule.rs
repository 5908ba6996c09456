//! Tick scheduling: a base delay scaled by a user-chosen speed multiplier.

use std::time::Duration;

/// Delay between search expansions at speed 1.
pub const SEARCH_TICK: Duration = Duration::from_millis(30);

/// Delay between revealed path cells at speed 1.
pub const PATH_TICK: Duration = Duration::from_millis(40);

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 16;

/// How often the driver should deliver a tick.
///
/// A larger multiplier gives a shorter delay; the algorithm's result never
/// depends on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSchedule {
    base: Duration,
    speed: u32,
}

impl TickSchedule {
    /// Create a schedule. `speed` is clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn new(base: Duration, speed: u32) -> Self {
        Self {
            base,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    #[inline]
    pub fn base(self) -> Duration {
        self.base
    }

    #[inline]
    pub fn speed(self) -> u32 {
        self.speed
    }

    /// The delay between two ticks.
    #[inline]
    pub fn interval(self) -> Duration {
        self.base / self.speed
    }

    /// Same speed, different base delay.
    pub fn with_base(self, base: Duration) -> Self {
        Self { base, ..self }
    }

    /// Double the speed, up to [`MAX_SPEED`].
    pub fn faster(self) -> Self {
        Self::new(self.base, self.speed.saturating_mul(2))
    }

    /// Halve the speed, down to [`MIN_SPEED`].
    pub fn slower(self) -> Self {
        Self::new(self.base, self.speed / 2)
    }
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::new(SEARCH_TICK, MIN_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_scales_with_speed() {
        let s = TickSchedule::new(Duration::from_millis(40), 4);
        assert_eq!(s.interval(), Duration::from_millis(10));
        assert_eq!(TickSchedule::default().interval(), SEARCH_TICK);
    }

    #[test]
    fn speed_is_clamped() {
        let s = TickSchedule::new(SEARCH_TICK, 0);
        assert_eq!(s.speed(), MIN_SPEED);
        assert_eq!(s.slower().speed(), MIN_SPEED);

        let mut s = TickSchedule::default();
        for _ in 0..10 {
            s = s.faster();
        }
        assert_eq!(s.speed(), MAX_SPEED);
    }

    #[test]
    fn with_base_keeps_speed() {
        let s = TickSchedule::new(SEARCH_TICK, 2).with_base(PATH_TICK);
        assert_eq!(s.speed(), 2);
        assert_eq!(s.interval(), Duration::from_millis(20));
    }
}
