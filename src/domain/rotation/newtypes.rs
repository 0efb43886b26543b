// SPDX-License-Identifier: MPL-2.0
//! Rotation newtypes.
//!
//! This module provides type-safe wrappers for rotation values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Progress Bounds
// =============================================================================

/// Progress bounds (0 to 100 ticks).
pub mod progress_bounds {
    /// Empty progress indicator.
    pub const MIN: u8 = 0;
    /// Full progress indicator.
    pub const MAX: u8 = 100;
}

// =============================================================================
// Progress
// =============================================================================

/// Fill level of the progress indicator, guaranteed to be within 0–100.
///
/// One progress-tick adds one unit. The indicator saturates at the maximum
/// and only returns to zero through [`Progress::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Progress(u8);

impl Progress {
    /// Creates a progress value, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(progress_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the fill level as a fraction in `[0.0, 1.0]`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        f32::from(self.0) / f32::from(progress_bounds::MAX)
    }

    /// Returns the next value, saturating at the maximum.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Returns an empty progress value.
    #[must_use]
    pub fn reset() -> Self {
        Self(progress_bounds::MIN)
    }

    /// Returns true when the indicator is full.
    #[must_use]
    pub fn is_full(self) -> bool {
        self.0 >= progress_bounds::MAX
    }
}

// =============================================================================
// Fact Interval Bounds
// =============================================================================

/// Fact interval bounds (2 to 60 seconds).
pub mod fact_interval_bounds {
    /// Minimum interval in seconds.
    pub const MIN_SECS: u32 = 2;
    /// Maximum interval in seconds.
    pub const MAX_SECS: u32 = 60;
    /// Default interval in seconds.
    pub const DEFAULT_SECS: u32 = 5;
}

// =============================================================================
// FactInterval
// =============================================================================

/// Period between two fact-advance firings, in whole seconds (2–60).
///
/// The progress-tick period is derived from it so that exactly
/// [`progress_bounds::MAX`] ticks fit into one rotation.
///
/// # Example
///
/// ```
/// use feline_fascination::domain::rotation::FactInterval;
/// use std::time::Duration;
///
/// let interval = FactInterval::default();
/// assert_eq!(interval.fact_period(), Duration::from_millis(5000));
/// assert_eq!(interval.tick_period(), Duration::from_millis(50));
///
/// // Values outside range are clamped
/// assert_eq!(FactInterval::new(600).value(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactInterval(u32);

impl FactInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(
            fact_interval_bounds::MIN_SECS,
            fact_interval_bounds::MAX_SECS,
        ))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Period of the fact-advance action.
    #[must_use]
    pub fn fact_period(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Period of the progress-tick action.
    #[must_use]
    pub fn tick_period(self) -> Duration {
        self.fact_period() / u32::from(progress_bounds::MAX)
    }

    /// Returns the interval one second longer, clamped.
    #[must_use]
    pub fn increased(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// Returns the interval one second shorter, clamped.
    #[must_use]
    pub fn decreased(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= fact_interval_bounds::MIN_SECS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= fact_interval_bounds::MAX_SECS
    }
}

impl Default for FactInterval {
    fn default() -> Self {
        Self(fact_interval_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_new_clamps_to_max() {
        assert_eq!(Progress::new(250).value(), progress_bounds::MAX);
        assert_eq!(Progress::new(42).value(), 42);
    }

    #[test]
    fn progress_increment_saturates() {
        let full = Progress::new(progress_bounds::MAX);
        assert_eq!(full.increment(), full);
        assert_eq!(Progress::new(7).increment().value(), 8);
    }

    #[test]
    fn progress_fraction_spans_unit_interval() {
        assert!((Progress::reset().as_fraction() - 0.0).abs() < f32::EPSILON);
        assert!((Progress::new(100).as_fraction() - 1.0).abs() < f32::EPSILON);
        assert!((Progress::new(50).as_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_full_only_at_max() {
        assert!(Progress::new(100).is_full());
        assert!(!Progress::new(99).is_full());
    }

    #[test]
    fn fact_interval_clamps_to_valid_range() {
        assert_eq!(FactInterval::new(0).value(), fact_interval_bounds::MIN_SECS);
        assert_eq!(FactInterval::new(1000).value(), fact_interval_bounds::MAX_SECS);
        assert_eq!(FactInterval::new(10).value(), 10);
    }

    #[test]
    fn default_interval_matches_nominal_periods() {
        let interval = FactInterval::default();
        assert_eq!(interval.fact_period(), Duration::from_millis(5000));
        assert_eq!(interval.tick_period(), Duration::from_millis(50));
    }

    #[test]
    fn tick_period_fits_exactly_one_hundred_times() {
        for secs in fact_interval_bounds::MIN_SECS..=fact_interval_bounds::MAX_SECS {
            let interval = FactInterval::new(secs);
            assert_eq!(interval.tick_period() * 100, interval.fact_period());
        }
    }

    #[test]
    fn increased_and_decreased_stay_in_bounds() {
        let max = FactInterval::new(fact_interval_bounds::MAX_SECS);
        assert!(max.increased().is_max());
        let min = FactInterval::new(fact_interval_bounds::MIN_SECS);
        assert!(min.decreased().is_min());
        assert_eq!(FactInterval::new(5).increased().value(), 6);
        assert_eq!(FactInterval::new(5).decreased().value(), 4);
    }
}
