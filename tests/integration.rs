// SPDX-License-Identifier: MPL-2.0
use feline_fascination::app::{App, Flags, Message, Screen};
use feline_fascination::config::{self, Config, GeneralConfig};
use feline_fascination::domain::content::Fact;
use feline_fascination::i18n::fluent::I18n;
use feline_fascination::rotation::{RotationEvent, Status};
use feline_fascination::ui::home::{self, quiz, QuizResult};
use feline_fascination::ui::notifications::Severity;
use feline_fascination::ui::theming::ThemeMode;
use feline_fascination::ui::{header, settings};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn flags_for(dir: &Path) -> Flags {
    Flags {
        config_dir: Some(dir.join("config")),
        data_dir: Some(dir.join("data")),
        ..Flags::default()
    }
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("window-title"), "Feline Fascination");

    // 2. Switch to French and reload
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write updated config file");

    let loaded = config::load_from_path(&temp_config_file_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("window-title"), "Fascination Féline");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_every_builtin_fact_is_translated() {
    let deck = feline_fascination::domain::content::FactDeck::builtin();
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for fact in deck.iter() {
            let Fact::Localized(key) = fact else {
                panic!("built-in facts are localized");
            };
            assert!(!i18n.tr(key).starts_with("MISSING"), "{locale}: {key}");
        }
    }
}

#[test]
fn test_app_starts_with_rotation_at_first_fact() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (app, _task) = App::new(flags_for(dir.path()));

    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.rotation().status(), Status::Active);
    assert_eq!(app.rotation().state().current_index(), 0);
    assert_eq!(app.rotation().state().progress().value(), 0);
    assert!(!app.notifications().has_notifications());
}

#[test]
fn test_likes_accumulate_and_toast() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _task) = App::new(flags_for(dir.path()));

    for _ in 0..5 {
        let _ = app.update(Message::Home(home::Message::Like));
    }

    assert_eq!(app.home().likes.value(), 5);
    let toast = app.notifications().visible().next().expect("toast");
    assert_eq!(toast.severity(), Severity::Success);
    assert_eq!(toast.message_key(), "notification-like-thanks");
}

#[test]
fn test_quiz_answers() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _task) = App::new(flags_for(dir.path()));

    fn submit(app: &mut App, answer: &str) -> Option<QuizResult> {
        let _ = app.update(Message::Home(home::Message::Quiz(
            quiz::Message::AnswerChanged(answer.to_string()),
        )));
        let _ = app.update(Message::Home(home::Message::Quiz(quiz::Message::Submit)));
        app.home().quiz.result()
    }

    assert_eq!(submit(&mut app, "MEOW"), Some(QuizResult::Correct));
    assert_eq!(submit(&mut app, "purr"), Some(QuizResult::Incorrect));
    assert_eq!(submit(&mut app, " meow"), Some(QuizResult::Incorrect));
}

#[test]
fn test_settings_tears_down_rotation_and_saves_preferences() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _task) = App::new(flags_for(dir.path()));

    let _ = app.update(Message::Rotation(RotationEvent::FactAdvance));
    let _ = app.update(Message::Header(header::Message::OpenSettings));
    assert_eq!(app.rotation().status(), Status::TornDown);

    // Late timer events after teardown change nothing
    let frozen = *app.rotation().state();
    let _ = app.update(Message::Rotation(RotationEvent::ProgressTick));
    assert_eq!(*app.rotation().state(), frozen);

    let _ = app.update(Message::Settings(settings::Message::IncreaseInterval));
    let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
        ThemeMode::Dark,
    )));
    let _ = app.update(Message::Settings(settings::Message::BackToHome));

    assert_eq!(app.screen(), Screen::Home);
    assert!(app.rotation().is_active());
    assert_eq!(app.rotation().state().current_index(), 0);

    let saved = config::load_from_path(&dir.path().join("config").join("settings.toml"))
        .expect("settings.toml written on leaving settings");
    assert_eq!(saved.rotation.fact_interval_secs, Some(6));
    assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_dark_mode_toggle_is_persisted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _task) = App::new(flags_for(dir.path()));

    let _ = app.update(Message::Header(header::Message::ToggleDarkMode(true)));
    assert_eq!(app.theme_mode(), ThemeMode::Dark);

    let (restarted, _task) = App::new(flags_for(dir.path()));
    assert_eq!(restarted.theme_mode(), ThemeMode::Dark);
    // Page state is not persisted
    assert_eq!(restarted.home().likes.value(), 0);
}

#[test]
fn test_custom_facts_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let facts = dir.path().join("facts.toml");
    fs::write(&facts, "facts = [\"Cats nap.\", \"Cats purr.\", \"Cats climb.\"]\n")
        .expect("Failed to write facts file");

    let (mut app, _task) = App::new(Flags {
        facts_path: Some(facts),
        ..flags_for(dir.path())
    });
    assert_eq!(app.deck().len().get(), 3);

    for _ in 0..4 {
        let _ = app.update(Message::Rotation(RotationEvent::FactAdvance));
    }
    assert_eq!(app.rotation().state().current_index(), 1);
}

#[test]
fn test_empty_facts_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let facts = dir.path().join("facts.toml");
    fs::write(&facts, "facts = []\n").expect("Failed to write facts file");

    let (app, _task) = App::new(Flags {
        facts_path: Some(facts),
        ..flags_for(dir.path())
    });

    assert_eq!(app.deck(), &feline_fascination::domain::content::FactDeck::builtin());
    let toast = app.notifications().visible().next().expect("warning toast");
    assert_eq!(toast.severity(), Severity::Warning);
    assert_eq!(toast.message_key(), "notification-facts-empty");
}

#[test]
fn test_corrupt_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("settings.toml"), "[[[").expect("Failed to write settings");

    let (app, _task) = App::new(flags_for(dir.path()));

    assert_eq!(app.rotation().interval().value(), 5);
    let toast = app.notifications().visible().next().expect("warning toast");
    assert_eq!(toast.message_key(), "notification-config-load-error");
}

#[test]
fn test_unreadable_settings_are_never_overwritten() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_dir = dir.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    let settings_path = config_dir.join("settings.toml");
    let original = "[general]\nlanguage = \"fr\"\ntheme_mode = \"sepia\"\n";
    fs::write(&settings_path, original).expect("Failed to write settings");

    let (mut app, _task) = App::new(flags_for(dir.path()));
    let _ = app.update(Message::Header(header::Message::ToggleDarkMode(true)));
    let _ = app.update(Message::SwitchScreen(Screen::Settings));
    let _ = app.update(Message::Settings(settings::Message::BackToHome));

    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    let on_disk = fs::read_to_string(&settings_path).expect("Failed to read settings");
    assert_eq!(on_disk, original);
}
