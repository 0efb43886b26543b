// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The rotation bounds are re-exported from the domain layer so the
//! config file and the timer can never disagree.

use crate::domain::rotation::fact_interval_bounds;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default period between two facts (in seconds).
pub const DEFAULT_FACT_INTERVAL_SECS: u32 = fact_interval_bounds::DEFAULT_SECS;

/// Minimum period between two facts (in seconds).
pub const MIN_FACT_INTERVAL_SECS: u32 = fact_interval_bounds::MIN_SECS;

/// Maximum period between two facts (in seconds).
pub const MAX_FACT_INTERVAL_SECS: u32 = fact_interval_bounds::MAX_SECS;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Interval of the tick driving toast auto-dismiss (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Quiz
// ==========================================================================

/// Expected quiz answer, compared case-insensitively.
pub const QUIZ_ANSWER: &str = "meow";
