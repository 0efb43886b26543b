// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::rotation::RotationEvent;
use crate::ui::header;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Home(home::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    SwitchScreen(Screen),
    /// A firing of one of the rotation's periodic actions.
    Rotation(RotationEvent),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
    /// Result of a background diagnostics export (written path or error text).
    DiagnosticsExported(Result<PathBuf, String>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional TOML file with a custom fact deck.
    /// Takes precedence over `[content] facts_file` in `settings.toml`.
    pub facts_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<PathBuf>,
    /// Optional data directory override (for diagnostics exports).
    pub data_dir: Option<PathBuf>,
}
