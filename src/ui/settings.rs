// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme mode, fact interval and diagnostics export.
//!
//! Changes apply immediately; the application saves them to `settings.toml`
//! when the user goes back to the page.

use crate::domain::rotation::FactInterval;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub fact_interval: FactInterval,
    /// A diagnostics export is in flight.
    pub exporting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    IncreaseInterval,
    DecreaseInterval,
    ExportDiagnostics,
    BackToHome,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    FactIntervalChanged(FactInterval),
    ExportDiagnostics,
    BackToHome,
}

/// Process a settings message against the current interval.
///
/// Interval buttons at a bound produce no event.
pub fn update(message: Message, current_interval: FactInterval) -> Option<Event> {
    match message {
        Message::LanguageSelected(locale) => Some(Event::LanguageChanged(locale)),
        Message::ThemeModeSelected(mode) => Some(Event::ThemeModeChanged(mode)),
        Message::IncreaseInterval => (!current_interval.is_max())
            .then(|| Event::FactIntervalChanged(current_interval.increased())),
        Message::DecreaseInterval => (!current_interval.is_min())
            .then(|| Event::FactIntervalChanged(current_interval.decreased())),
        Message::ExportDiagnostics => Some(Event::ExportDiagnostics),
        Message::BackToHome => Some(Event::BackToHome),
    }
}

fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let raw = locale.to_string();
    let translated = i18n.tr(&format!("language-name-{raw}"));
    if translated.starts_with("MISSING:") {
        raw
    } else {
        format!("{translated} ({raw})")
    }
}

fn option_button<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(if selected {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .into()
}

fn heading<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::TITLE_SM)
}

/// Render the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let languages = i18n
        .available_locales
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, locale| {
            row.push(option_button(
                language_label(i18n, locale),
                i18n.current_locale() == locale,
                Message::LanguageSelected(locale.clone()),
            ))
        });

    let theme_modes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            row.push(option_button(
                i18n.tr(mode.i18n_key()),
                mode == ctx.theme_mode,
                Message::ThemeModeSelected(mode),
            ))
        });

    let interval = ctx.fact_interval;
    let seconds = interval.value().to_string();
    let stepper = |label: &'static str, message: Message, at_bound: bool| {
        let stepper = button(Text::new(label))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected);
        if at_bound {
            stepper
        } else {
            stepper.on_press(message)
        }
    };
    let interval_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(stepper("−", Message::DecreaseInterval, interval.is_min()))
        .push(Text::new(i18n.tr_with_args(
            "settings-interval-value",
            &[("seconds", seconds.as_str())],
        )))
        .push(stepper("+", Message::IncreaseInterval, interval.is_max()));

    let export_label = if ctx.exporting {
        i18n.tr("settings-exporting")
    } else {
        i18n.tr("settings-export-diagnostics")
    };
    let mut export_button = button(Text::new(export_label))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if !ctx.exporting {
        export_button = export_button.on_press(Message::ExportDiagnostics);
    }

    let back_button = button(Text::new(i18n.tr("settings-back")))
        .on_press(Message::BackToHome)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(640.0)
        .push(Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG))
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(heading(i18n.tr("settings-language")))
                .push(languages),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(heading(i18n.tr("settings-theme")))
                .push(theme_modes),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(heading(i18n.tr("settings-interval")))
                .push(interval_row),
        )
        .push(
            Column::new()
                .spacing(spacing::XS)
                .push(heading(i18n.tr("settings-diagnostics")))
                .push(Text::new(i18n.tr("settings-diagnostics-hint")).size(typography::CAPTION))
                .push(export_button),
        )
        .push(back_button);

    Container::new(Container::new(content).style(styles::container::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rotation::fact_interval_bounds;

    #[test]
    fn increase_moves_interval_up() {
        let event = update(Message::IncreaseInterval, FactInterval::new(5));
        assert_eq!(event, Some(Event::FactIntervalChanged(FactInterval::new(6))));
    }

    #[test]
    fn steppers_stop_at_bounds() {
        let max = FactInterval::new(fact_interval_bounds::MAX_SECS);
        let min = FactInterval::new(fact_interval_bounds::MIN_SECS);
        assert_eq!(update(Message::IncreaseInterval, max), None);
        assert_eq!(update(Message::DecreaseInterval, min), None);
    }

    #[test]
    fn language_label_falls_back_to_raw_id() {
        let i18n = I18n::default();
        let unknown: LanguageIdentifier = "de".parse().expect("valid id");
        assert_eq!(language_label(&i18n, &unknown), "de");
    }

    #[test]
    fn language_label_uses_translated_name() {
        let i18n = I18n::default();
        let french: LanguageIdentifier = "fr".parse().expect("valid id");
        assert!(language_label(&i18n, &french).ends_with("(fr)"));
    }
}
