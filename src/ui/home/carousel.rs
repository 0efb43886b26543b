// SPDX-License-Identifier: MPL-2.0
//! Captioned slide carousel.

use crate::domain::content::{Slide, CAROUSEL_SLIDES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Next,
    Previous,
}

impl State {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(self) -> &'static Slide {
        &CAROUSEL_SLIDES[self.index % CAROUSEL_SLIDES.len()]
    }
}

/// Moves to the neighboring slide, wrapping at both ends.
pub fn update(state: &mut State, message: Message) {
    let len = CAROUSEL_SLIDES.len();
    state.index = match message {
        Message::Next => (state.index + 1) % len,
        Message::Previous => (state.index + len - 1) % len,
    };
}

pub fn view<'a>(i18n: &'a I18n, state: State) -> Element<'a, Message> {
    let slide = state.current();

    let arrow = |label: &'static str, message: Message| {
        button(Text::new(label).size(typography::TITLE_MD))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::ghost)
    };

    let frame = Container::new(Text::new(slide.glyph).size(sizing::SLIDE_GLYPH))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero);

    let position = format!("{} / {}", state.index + 1, CAROUSEL_SLIDES.len());

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(arrow("‹", Message::Previous))
                .push(frame)
                .push(arrow("›", Message::Next)),
        )
        .push(Text::new(i18n.tr(slide.caption_key)).size(typography::BODY_LG))
        .push(Text::new(position).size(typography::CAPTION))
        .into()
}
