// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home page and
//! the settings screen.
//!
//! The `App` struct wires together the page state, the fact rotation,
//! localization and persisted preferences, and translates messages into
//! side effects like config persistence or diagnostics export.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector};
use crate::domain::content::FactDeck;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::rotation::RotationTimer;
use crate::ui::home;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    home: home::State,
    deck: FactDeck,
    rotation: RotationTimer,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Preferences as loaded, updated in place by the settings screen.
    config: Config,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    /// False when `settings.toml` exists but could not be read, so the
    /// user's file is never replaced by defaults.
    preferences_writable: bool,
    exporting: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("rotation", &self.rotation.state())
            .field("likes", &self.home.likes.value())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let deck = FactDeck::builtin();
        let config = Config::default();
        let mut rotation = RotationTimer::new(deck.len(), config.rotation.fact_interval());
        rotation.activate();

        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            home: home::State::default(),
            deck,
            rotation,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            config,
            config_dir: None,
            data_dir: None,
            preferences_writable: true,
            exporting: false,
        }
    }
}

/// Loads the fact deck named by the CLI or the config, falling back to the
/// built-in deck. Returns the i18n key of a warning when the fallback was
/// caused by an error.
fn load_deck(path: Option<&PathBuf>) -> (FactDeck, Option<(&'static str, String)>) {
    let Some(path) = path else {
        return (FactDeck::builtin(), None);
    };

    match config::load_fact_deck(path) {
        Ok(deck) => (deck, None),
        Err(error) => {
            eprintln!("Failed to load facts from {}: {}", path.display(), error);
            let key = match &error {
                Error::Content(content) => content.i18n_key(),
                Error::Io(_) | Error::Config(_) => "notification-facts-load-error",
            };
            (FactDeck::builtin(), Some((key, error.to_string())))
        }
    }
}

impl App {
    /// Initializes application state from the preferences file and CLI flags,
    /// and starts the fact rotation.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let facts_path = flags
            .facts_path
            .clone()
            .or_else(|| config.content.facts_file.clone());
        let (deck, deck_warning) = load_deck(facts_path.as_ref());

        let mut rotation = RotationTimer::new(deck.len(), config.rotation.fact_interval());
        rotation.activate();

        let mut app = App {
            i18n,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            home: home::State::default(),
            deck,
            rotation,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            config,
            config_dir: flags.config_dir,
            data_dir: flags.data_dir,
            preferences_writable: config_warning.is_none(),
            exporting: false,
        };

        app.diagnostics.log_state(AppStateEvent::Started {
            locale: app.i18n.current_locale().to_string(),
            fact_count: app.deck.len().get(),
        });
        app.diagnostics.log_state(AppStateEvent::RotationActivated {
            interval_secs: app.rotation.interval().value(),
        });

        if let Some(key) = config_warning {
            app.diagnostics.log_warning(&key, "settings.toml could not be read");
            app.notifications.push(Notification::warning(key));
        }
        if let Some((key, details)) = deck_warning {
            app.diagnostics.log_warning(key, details);
            app.notifications.push(Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let rotation_sub = subscription::create_rotation_subscription(self.screen, &self.rotation);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([rotation_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            home: &mut self.home,
            rotation: &mut self.rotation,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
            config: &mut self.config,
            config_dir: &self.config_dir,
            data_dir: &self.data_dir,
            preferences_writable: self.preferences_writable,
            exporting: &mut self.exporting,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Rotation(event) => update::handle_rotation_event(&mut ctx, event),
            Message::Tick(_instant) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::DiagnosticsExported(result) => {
                update::handle_diagnostics_exported(&mut ctx, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            home: &self.home,
            deck: &self.deck,
            rotation: self.rotation.state(),
            fact_interval: self.rotation.interval(),
            exporting: self.exporting,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn home(&self) -> &home::State {
        &self.home
    }

    #[must_use]
    pub fn deck(&self) -> &FactDeck {
        &self.deck
    }

    #[must_use]
    pub fn rotation(&self) -> &RotationTimer {
        &self.rotation
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}
