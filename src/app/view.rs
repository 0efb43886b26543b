// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::domain::content::FactDeck;
use crate::domain::rotation::FactInterval;
use crate::i18n::fluent::I18n;
use crate::rotation::RotationState;
use crate::ui::header::{self, ViewContext as HeaderViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub home: &'a home::State,
    pub deck: &'a FactDeck,
    pub rotation: &'a RotationState,
    pub fact_interval: FactInterval,
    pub exporting: bool,
    pub notifications: &'a notifications::Manager,
}

/// Renders the header, the active screen and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(HeaderViewContext {
        i18n: ctx.i18n,
        dark_mode: ctx.theme_mode.is_dark(),
        show_settings_button: ctx.screen == Screen::Home,
    })
    .map(Message::Header);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext {
            i18n: ctx.i18n,
            state: ctx.home,
            deck: ctx.deck,
            rotation: ctx.rotation,
        })
        .map(Message::Home),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
            fact_interval: ctx.fact_interval,
            exporting: ctx.exporting,
        })
        .map(Message::Settings),
    };

    let page = Container::new(
        Column::new()
            .push(header_view)
            .push(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
