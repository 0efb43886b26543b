// SPDX-License-Identifier: MPL-2.0
//! Logical clock for driving the rotation without wall-clock timers.

use super::{RotationEvent, RotationTimer};
use crate::domain::rotation::FactInterval;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
struct PeriodicAction {
    event: RotationEvent,
    period: Duration,
    next_due: Duration,
}

impl PeriodicAction {
    fn new(event: RotationEvent, period: Duration) -> Self {
        Self {
            event,
            period,
            next_due: period,
        }
    }
}

/// Emits fact-advance and progress-tick events as a logical clock moves.
///
/// Events come out in due-time order. When both actions are due at the
/// same instant the progress-tick is emitted first, so the bar is seen full
/// right before the fact swap.
///
/// ```
/// use feline_fascination::domain::rotation::FactInterval;
/// use feline_fascination::rotation::{ManualScheduler, RotationEvent};
/// use std::time::Duration;
///
/// let mut scheduler = ManualScheduler::new(FactInterval::default());
/// let events = scheduler.advance_by(Duration::from_millis(5000));
/// let ticks = events.iter().filter(|e| **e == RotationEvent::ProgressTick).count();
/// assert_eq!(ticks, 100);
/// assert_eq!(events.last(), Some(&RotationEvent::FactAdvance));
/// ```
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    now: Duration,
    // Ordered by tie-break priority.
    actions: [PeriodicAction; 2],
}

impl ManualScheduler {
    #[must_use]
    pub fn new(interval: FactInterval) -> Self {
        Self {
            now: Duration::ZERO,
            actions: [
                PeriodicAction::new(RotationEvent::ProgressTick, interval.tick_period()),
                PeriodicAction::new(RotationEvent::FactAdvance, interval.fact_period()),
            ],
        }
    }

    /// Logical time elapsed since the scheduler started.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Moves the clock forward and returns every event that became due.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<RotationEvent> {
        let target = self.now + delta;
        let mut fired = Vec::new();

        while let Some(action) = self
            .actions
            .iter_mut()
            .filter(|action| action.next_due <= target)
            .min_by_key(|action| action.next_due)
        {
            self.now = action.next_due;
            action.next_due += action.period;
            fired.push(action.event);
        }

        self.now = target;
        fired
    }

    /// Advances the clock and feeds the due events to `timer`.
    ///
    /// Returns the number of events the timer accepted as state changes.
    pub fn drive(&mut self, timer: &mut RotationTimer, delta: Duration) -> usize {
        self.advance_by(delta)
            .into_iter()
            .filter(|event| timer.handle(*event))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn count(events: &[RotationEvent], kind: RotationEvent) -> usize {
        events.iter().filter(|event| **event == kind).count()
    }

    #[test]
    fn nothing_fires_before_first_tick() {
        let mut scheduler = ManualScheduler::new(FactInterval::default());
        assert!(scheduler.advance_by(Duration::from_millis(49)).is_empty());
        assert_eq!(scheduler.now(), Duration::from_millis(49));
    }

    #[test]
    fn tick_fires_every_fifty_milliseconds() {
        let mut scheduler = ManualScheduler::new(FactInterval::default());
        let events = scheduler.advance_by(Duration::from_millis(1000));
        assert_eq!(count(&events, RotationEvent::ProgressTick), 20);
        assert_eq!(count(&events, RotationEvent::FactAdvance), 0);
    }

    #[test]
    fn tick_precedes_advance_on_tie() {
        let mut scheduler = ManualScheduler::new(FactInterval::default());
        let events = scheduler.advance_by(Duration::from_millis(5000));
        assert_eq!(events.len(), 101);
        assert_eq!(events[99], RotationEvent::ProgressTick);
        assert_eq!(events[100], RotationEvent::FactAdvance);
    }

    #[test]
    fn incremental_advances_match_single_jump() {
        let mut stepped = ManualScheduler::new(FactInterval::default());
        let mut events = Vec::new();
        for _ in 0..70 {
            events.extend(stepped.advance_by(Duration::from_millis(130)));
        }

        let mut jumped = ManualScheduler::new(FactInterval::default());
        assert_eq!(events, jumped.advance_by(Duration::from_millis(9100)));
    }

    #[test]
    fn drive_reaches_full_progress_just_before_swap() {
        let mut timer = RotationTimer::new(
            NonZeroUsize::new(3).expect("non-zero"),
            FactInterval::default(),
        );
        timer.activate();
        let mut scheduler = ManualScheduler::new(FactInterval::default());

        scheduler.drive(&mut timer, Duration::from_millis(4999));
        assert_eq!(timer.state().progress().value(), 99);
        assert_eq!(timer.state().current_index(), 0);

        scheduler.drive(&mut timer, Duration::from_millis(1));
        assert_eq!(timer.state().progress().value(), 0);
        assert_eq!(timer.state().current_index(), 1);
    }
}
