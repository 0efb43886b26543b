// SPDX-License-Identifier: MPL-2.0
//! Page header with the title, the dark-mode switch and the settings button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, toggler, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Effective theme is dark.
    pub dark_mode: bool,
    /// The settings button is hidden while the settings screen is shown.
    pub show_settings_button: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleDarkMode(bool),
    OpenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DarkModeChanged(bool),
    OpenSettings,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleDarkMode(dark) => Event::DarkModeChanged(dark),
        Message::OpenSettings => Event::OpenSettings,
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD);

    let dark_switch = toggler(ctx.dark_mode)
        .label(ctx.i18n.tr("header-dark-mode"))
        .on_toggle(Message::ToggleDarkMode)
        .size(20.0);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(Text::new("🐾").size(typography::TITLE_MD))
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(dark_switch);

    if ctx.show_settings_button {
        row = row.push(
            button(Text::new(ctx.i18n.tr("header-settings")))
                .on_press(Message::OpenSettings)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_carries_new_flag() {
        assert_eq!(
            update(Message::ToggleDarkMode(true)),
            Event::DarkModeChanged(true)
        );
        assert_eq!(
            update(Message::ToggleDarkMode(false)),
            Event::DarkModeChanged(false)
        );
    }

    #[test]
    fn settings_button_requests_navigation() {
        assert_eq!(update(Message::OpenSettings), Event::OpenSettings);
    }
}
