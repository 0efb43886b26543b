// SPDX-License-Identifier: MPL-2.0
//! Fact rotation domain types.
//!
//! This module provides pure value objects for the rotating fact widget:
//! - [`Progress`]: Fill level of the progress indicator (0–100)
//! - [`FactInterval`]: Period between two fact swaps

mod newtypes;

pub use newtypes::{fact_interval_bounds, progress_bounds, FactInterval, Progress};
