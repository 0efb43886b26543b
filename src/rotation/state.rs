// SPDX-License-Identifier: MPL-2.0
//! Rotation state and its transitions.

use super::RotationEvent;
use crate::domain::rotation::Progress;
use std::num::NonZeroUsize;

/// Current fact index and progress fill level.
///
/// `progress` returns to zero exactly when `current_index` changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    current_index: usize,
    progress: Progress,
    len: NonZeroUsize,
}

impl RotationState {
    /// Initial state for a deck of `len` facts: first fact, empty progress.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            current_index: 0,
            progress: Progress::reset(),
            len,
        }
    }

    /// Fact-advance transition.
    #[must_use]
    pub fn advance_fact(self) -> Self {
        Self {
            current_index: (self.current_index + 1) % self.len.get(),
            progress: Progress::reset(),
            ..self
        }
    }

    /// Progress-tick transition.
    #[must_use]
    pub fn tick_progress(self) -> Self {
        Self {
            progress: self.progress.increment(),
            ..self
        }
    }

    /// Applies the transition matching `event`.
    #[must_use]
    pub fn apply(self, event: RotationEvent) -> Self {
        match event {
            RotationEvent::FactAdvance => self.advance_fact(),
            RotationEvent::ProgressTick => self.tick_progress(),
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Number of facts being rotated.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero deck size")
    }

    #[test]
    fn starts_at_first_fact_with_empty_progress() {
        let state = RotationState::new(deck_of(3));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress().value(), 0);
    }

    #[test]
    fn advance_wraps_cyclically() {
        let mut state = RotationState::new(deck_of(3));
        for expected in [1, 2, 0, 1] {
            state = state.advance_fact();
            assert_eq!(state.current_index(), expected);
        }
    }

    #[test]
    fn single_fact_deck_stays_on_index_zero() {
        let state = RotationState::new(deck_of(1)).advance_fact().advance_fact();
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn advance_resets_progress() {
        let mut state = RotationState::new(deck_of(2));
        for _ in 0..37 {
            state = state.tick_progress();
        }
        assert_eq!(state.progress().value(), 37);

        let state = state.advance_fact();
        assert_eq!(state.progress().value(), 0);
    }

    #[test]
    fn tick_saturates_at_one_hundred() {
        let mut state = RotationState::new(deck_of(2));
        for _ in 0..150 {
            state = state.tick_progress();
        }
        assert_eq!(state.progress().value(), 100);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn apply_dispatches_to_matching_transition() {
        let state = RotationState::new(deck_of(4));
        assert_eq!(state.apply(RotationEvent::FactAdvance), state.advance_fact());
        assert_eq!(
            state.apply(RotationEvent::ProgressTick),
            state.tick_progress()
        );
    }
}
