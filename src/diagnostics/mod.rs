// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log for troubleshooting.
//!
//! Page interactions, lifecycle changes and surfaced warnings are recorded
//! as timestamped events in a memory-bounded circular buffer. The log can be
//! exported from the Settings screen as a pretty-printed JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: Owns the buffer and builds [`DiagnosticReport`]s
//!
//! Nothing leaves the machine unless the user exports the report.

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, ReportMetadata};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use export::{export_report, generate_default_filename, write_atomic, ExportError};
