// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of
//! application state it may touch, translates component events into state
//! changes, and returns any follow-up [`Task`].

use super::{paths, persistence, Message, Screen};
use crate::config::Config;
use crate::diagnostics::{self, AppStateEvent, DiagnosticsCollector, ExportError, UserAction};
use crate::i18n::fluent::I18n;
use crate::rotation::{RotationEvent, RotationTimer};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::home::{self, Event as HomeEvent, QuizResult};
use crate::ui::notifications::{self, Notification};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub home: &'a mut home::State,
    pub rotation: &'a mut RotationTimer,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub data_dir: &'a Option<PathBuf>,
    /// Cleared when `settings.toml` could not be read at startup.
    pub preferences_writable: bool,
    pub exporting: &'a mut bool,
}

impl UpdateContext<'_> {
    fn persist(&mut self) {
        if !self.preferences_writable {
            self.diagnostics.log_warning(
                "notification-config-load-error",
                "preferences not saved: settings.toml is unreadable",
            );
            return;
        }
        persistence::persist_preferences(
            self.config,
            self.config_dir.clone(),
            self.notifications,
            self.diagnostics,
        );
    }
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::DarkModeChanged(dark) => {
            let mode = ThemeMode::from_dark_flag(dark);
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            ctx.diagnostics
                .log_action(UserAction::ToggleDarkMode { dark });
            ctx.persist();
            Task::none()
        }
        HeaderEvent::OpenSettings => {
            ctx.diagnostics.log_action(UserAction::OpenSettings);
            handle_screen_switch(ctx, Screen::Settings)
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(ctx.home, message) {
        HomeEvent::None => {}
        HomeEvent::Liked(total) => {
            ctx.diagnostics.log_action(UserAction::Like { total });
            ctx.notifications
                .push(Notification::success("notification-like-thanks"));
        }
        HomeEvent::QuizAnswered(result) => {
            let correct = result == QuizResult::Correct;
            ctx.diagnostics
                .log_action(UserAction::SubmitQuiz { correct });
            let notification = if correct {
                Notification::success("notification-quiz-correct")
            } else {
                Notification::info("notification-quiz-incorrect")
            };
            ctx.notifications.push(notification);
        }
        HomeEvent::TabSelected(tab) => {
            ctx.diagnostics.log_action(UserAction::SelectTab {
                tab: tab.as_str().to_string(),
            });
        }
        HomeEvent::CarouselMoved(direction) => {
            let action = match direction {
                home::carousel::Message::Next => UserAction::CarouselNext,
                home::carousel::Message::Previous => UserAction::CarouselPrevious,
            };
            ctx.diagnostics.log_action(action);
        }
        HomeEvent::LearnMore => {
            ctx.diagnostics.log_action(UserAction::LearnMore);
            ctx.notifications
                .push(Notification::info("notification-learn-more"));
        }
    }
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    let Some(event) = settings::update(message, ctx.rotation.interval()) else {
        return Task::none();
    };

    match event {
        SettingsEvent::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            ctx.diagnostics.log_action(UserAction::ChangeLanguage {
                locale: locale.to_string(),
            });
            Task::none()
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            ctx.diagnostics.log_action(UserAction::ChangeThemeMode {
                mode: format!("{mode:?}").to_lowercase(),
            });
            Task::none()
        }
        SettingsEvent::FactIntervalChanged(interval) => {
            ctx.rotation.set_interval(interval);
            ctx.config.rotation.fact_interval_secs = Some(interval.value());
            ctx.diagnostics.log_action(UserAction::ChangeFactInterval {
                secs: interval.value(),
            });
            Task::none()
        }
        SettingsEvent::ExportDiagnostics => start_diagnostics_export(ctx),
        SettingsEvent::BackToHome => {
            ctx.diagnostics.log_action(UserAction::ReturnHome);
            handle_screen_switch(ctx, Screen::Home)
        }
    }
}

/// Switches screens, tearing the rotation down when the home page goes away
/// and starting a fresh one when it comes back.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let previous = *ctx.screen;
    if previous == target {
        return Task::none();
    }

    if previous == Screen::Home {
        let state = *ctx.rotation.state();
        ctx.rotation.teardown();
        ctx.diagnostics.log_state(AppStateEvent::RotationTornDown {
            fact_index: state.current_index(),
            progress: state.progress().value(),
        });
    }

    if previous == Screen::Settings {
        ctx.persist();
    }

    *ctx.screen = target;

    if target == Screen::Home {
        ctx.rotation.activate();
        ctx.diagnostics.log_state(AppStateEvent::RotationActivated {
            interval_secs: ctx.rotation.interval().value(),
        });
    }

    Task::none()
}

/// Applies a rotation event. Events from a torn-down rotation are dropped
/// by the timer itself.
pub fn handle_rotation_event(ctx: &mut UpdateContext<'_>, event: RotationEvent) -> Task<Message> {
    if *ctx.screen == Screen::Home {
        ctx.rotation.handle(event);
    }
    Task::none()
}

fn start_diagnostics_export(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.exporting {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::ExportDiagnostics);

    let json = match ctx.diagnostics.export_json() {
        Ok(json) => json,
        Err(error) => {
            return Task::done(Message::DiagnosticsExported(Err(
                ExportError::from(error).to_string()
            )))
        }
    };
    let Some(dir) = paths::get_app_data_dir_with_override(ctx.data_dir.clone()) else {
        return Task::done(Message::DiagnosticsExported(Err(
            ExportError::NoDirectory.to_string()
        )));
    };

    *ctx.exporting = true;
    Task::perform(diagnostics::export_report(dir, json), |result| {
        Message::DiagnosticsExported(result.map_err(|error| error.to_string()))
    })
}

pub fn handle_diagnostics_exported(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, String>,
) -> Task<Message> {
    *ctx.exporting = false;
    match result {
        Ok(path) => {
            ctx.notifications.push(
                Notification::success("notification-diagnostics-exported")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(error) => {
            eprintln!("Failed to export diagnostics: {}", error);
            ctx.diagnostics
                .log_error("notification-diagnostics-export-error", error.clone());
            ctx.notifications.push(
                Notification::error("notification-diagnostics-export-error")
                    .with_arg("error", error),
            );
        }
    }
    Task::none()
}
