// SPDX-License-Identifier: MPL-2.0
//! Rotation lifecycle and scheduling.

use super::{RotationEvent, RotationState};
use crate::domain::rotation::FactInterval;
use iced::{time, Subscription};
use std::num::NonZeroUsize;

/// Lifecycle of the rotation timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Created but never activated.
    Idle,
    /// Both periodic actions are scheduled.
    Active,
    /// The owning view was torn down; events are ignored.
    TornDown,
}

/// Owns a [`RotationState`] and decides when it may change.
///
/// The timer never spawns anything itself: while active it hands out a
/// subscription and the event loop feeds the resulting events back
/// through [`RotationTimer::handle`].
#[derive(Debug, Clone)]
pub struct RotationTimer {
    state: RotationState,
    interval: FactInterval,
    status: Status,
}

impl RotationTimer {
    #[must_use]
    pub fn new(len: NonZeroUsize, interval: FactInterval) -> Self {
        Self {
            state: RotationState::new(len),
            interval,
            status: Status::Idle,
        }
    }

    /// Starts both periodic actions from the initial state.
    ///
    /// Activating an already active timer keeps its current state.
    pub fn activate(&mut self) {
        if self.status != Status::Active {
            self.state = RotationState::new(self.state.len());
            self.status = Status::Active;
        }
    }

    /// Stops both periodic actions. Calling it again has no effect.
    pub fn teardown(&mut self) {
        if self.status == Status::Active {
            self.status = Status::TornDown;
        }
    }

    /// Applies a periodic action. Returns `true` if the state changed.
    ///
    /// Events arriving while the timer is not active are dropped.
    pub fn handle(&mut self, event: RotationEvent) -> bool {
        if self.status != Status::Active {
            return false;
        }
        let next = self.state.apply(event);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Changes the rotation period. Takes effect on the next subscription.
    pub fn set_interval(&mut self, interval: FactInterval) {
        self.interval = interval;
    }

    /// The two periodic actions, or nothing once torn down.
    pub fn subscription(&self) -> Subscription<RotationEvent> {
        if self.status != Status::Active {
            return Subscription::none();
        }

        Subscription::batch([
            time::every(self.interval.fact_period()).map(|_| RotationEvent::FactAdvance),
            time::every(self.interval.tick_period()).map(|_| RotationEvent::ProgressTick),
        ])
    }

    #[must_use]
    pub fn state(&self) -> &RotationState {
        &self.state
    }

    #[must_use]
    pub fn interval(&self) -> FactInterval {
        self.interval
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}
