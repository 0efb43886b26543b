// SPDX-License-Identifier: MPL-2.0
//! Rotating "fact of the day" engine.
//!
//! The widget is driven by two independent periodic actions:
//!
//! - **fact-advance** moves to the next fact and empties the progress bar
//! - **progress-tick** adds one unit to the progress bar
//!
//! # Architecture
//!
//! - [`RotationState`]: Plain value holding the fact index and progress,
//!   mutated only through its two pure transitions
//! - [`RotationTimer`]: Owns the state and its lifecycle (activate/teardown),
//!   and exposes the Iced subscription that schedules both actions
//! - [`ManualScheduler`]: Logical clock emitting the same events
//!   deterministically, for tests and benchmarks
//!
//! Both actions run on the UI event loop, so no synchronization is involved.

mod scheduler;
mod state;
mod timer;

pub use scheduler::ManualScheduler;
pub use state::RotationState;
pub use timer::{RotationTimer, Status};

/// A firing of one of the two periodic actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationEvent {
    /// Move to the next fact and reset progress.
    FactAdvance,
    /// Increment progress by one, saturating at full.
    ProgressTick,
}
