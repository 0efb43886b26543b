// SPDX-License-Identifier: MPL-2.0
//! Preferences persistence.
//!
//! The application keeps the loaded [`Config`] in memory, updates it as the
//! user changes settings, and writes it back when leaving the settings
//! screen or flipping the dark-mode switch.

use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector};
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;

/// Writes the preferences to `settings.toml`.
///
/// Skipped in unit tests so they never touch the user's config directory;
/// integration tests go through an explicit `config_dir` instead.
pub fn persist_preferences(
    config: &Config,
    config_dir: Option<PathBuf>,
    notifications: &mut notifications::Manager,
    diagnostics: &mut DiagnosticsCollector,
) {
    if cfg!(test) {
        return;
    }

    match config::save_with_override(config, config_dir) {
        Ok(()) => diagnostics.log_state(AppStateEvent::PreferencesSaved),
        Err(error) => {
            eprintln!("Failed to save config: {}", error);
            diagnostics.log_warning("notification-config-save-error", error.to_string());
            notifications.push(Notification::warning("notification-config-save-error"));
        }
    }
}
