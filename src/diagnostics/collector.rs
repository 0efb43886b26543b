// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector storing events and building reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    UserAction,
};

/// Collects diagnostic events in a bounded buffer.
///
/// The collector lives in the application state and is only touched from
/// `update`, so events are pushed synchronously.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.push(DiagnosticEventKind::UserAction { action });
    }

    pub fn log_state(&mut self, state: AppStateEvent) {
        self.push(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&mut self, message_key: impl Into<String>, details: impl Into<String>) {
        self.push(DiagnosticEventKind::Warning {
            message_key: message_key.into(),
            details: details.into(),
        });
    }

    pub fn log_error(&mut self, message_key: impl Into<String>, details: impl Into<String>) {
        self.push(DiagnosticEventKind::Error {
            message_key: message_key.into(),
            details: details.into(),
        });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp: event.timestamp.to_rfc3339(),
                kind: event.kind.clone(),
            })
            .collect();

        let mut event_counts = BTreeMap::new();
        for event in self.buffer.iter() {
            *event_counts.entry(event.category().to_string()).or_insert(0) += 1;
        }

        DiagnosticReport {
            metadata: ReportMetadata {
                app_version: env!("CARGO_PKG_VERSION").to_string(),
                collection_started_at: self.started_at.to_rfc3339(),
                exported_at: Utc::now().to_rfc3339(),
                event_count: events.len(),
                os: std::env::consts::OS.to_string(),
            },
            event_counts,
            events,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    pub app_version: String,
    /// RFC 3339.
    pub collection_started_at: String,
    pub exported_at: String,
    pub event_count: usize,
    pub os: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp: String,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

/// A complete diagnostic report ready for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    /// Number of events per category.
    pub event_counts: BTreeMap<String, usize>,
    pub events: Vec<SerializableEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_records_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::OpenSettings);
        collector.log_state(AppStateEvent::PreferencesSaved);

        let categories: Vec<_> = collector.iter().map(DiagnosticEvent::category).collect();
        assert_eq!(categories, vec!["user_action", "app_state"]);
    }

    #[test]
    fn collector_respects_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        for total in 0..40 {
            collector.log_action(UserAction::Like { total });
        }
        assert_eq!(collector.len(), 16);
        let first = collector.iter().next().map(|e| e.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::Like { total: 24 }
            })
        );
    }

    #[test]
    fn report_counts_categories() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::LearnMore);
        collector.log_warning("notification-config-load-error", "bad toml");
        collector.log_warning("notification-facts-empty", "");
        collector.log_error("notification-io-error", "denied");

        let report = collector.build_report();
        assert_eq!(report.metadata.event_count, 4);
        assert_eq!(report.event_counts.get("warning"), Some(&2));
        assert_eq!(report.event_counts.get("error"), Some(&1));
        assert_eq!(report.event_counts.get("user_action"), Some(&1));
    }

    #[test]
    fn export_json_is_parseable() {
        let mut collector = DiagnosticsCollector::default();
        collector.log_action(UserAction::SubmitQuiz { correct: true });

        let json = collector.export_json().expect("serialize");
        let report: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(report["metadata"]["event_count"], 1);
        assert_eq!(report["events"][0]["action"], "submit_quiz");
        assert_eq!(report["events"][0]["correct"], true);
    }
}
