// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User-initiated actions on the page or the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    Like { total: u32 },
    SubmitQuiz { correct: bool },
    SelectTab { tab: String },
    CarouselNext,
    CarouselPrevious,
    LearnMore,
    ToggleDarkMode { dark: bool },
    OpenSettings,
    ReturnHome,
    ChangeLanguage { locale: String },
    ChangeThemeMode { mode: String },
    ChangeFactInterval { secs: u32 },
    ExportDiagnostics,
}

/// Lifecycle changes of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    Started { locale: String, fact_count: usize },
    RotationActivated { interval_secs: u32 },
    RotationTornDown { fact_index: usize, progress: u8 },
    PreferencesSaved,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        #[serde(flatten)]
        action: UserAction,
    },
    AppState {
        #[serde(flatten)]
        state: AppStateEvent,
    },
    /// A warning surfaced to the user, identified by its message key.
    Warning { message_key: String, details: String },
    Error { message_key: String, details: String },
}

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Short category name used in report summaries.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.kind {
            DiagnosticEventKind::UserAction { .. } => "user_action",
            DiagnosticEventKind::AppState { .. } => "app_state",
            DiagnosticEventKind::Warning { .. } => "warning",
            DiagnosticEventKind::Error { .. } => "error",
        }
    }
}
