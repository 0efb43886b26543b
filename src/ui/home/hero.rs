// SPDX-License-Identifier: MPL-2.0
//! Hero card with the like button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Number of likes given during this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeCounter(u32);

impl LikeCounter {
    /// Adds one like and returns the new total.
    pub fn like(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    likes: LikeCounter,
    on_like: Message,
) -> Element<'a, Message> {
    let banner = Container::new(Text::new("🐱").size(sizing::HERO_GLYPH))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(styles::container::hero);

    let count = likes.value().to_string();
    let like_button = button(Text::new(
        i18n.tr_with_args("like-button", &[("count", count.as_str())]),
    ))
    .on_press(on_like)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::like);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(banner)
        .push(Text::new(i18n.tr("hero-caption")).size(typography::BODY_LG))
        .push(like_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(LikeCounter::default().value(), 0);
    }

    #[test]
    fn k_likes_yield_k() {
        let mut counter = LikeCounter::default();
        let mut last = 0;
        for _ in 0..7 {
            last = counter.like();
        }
        assert_eq!(last, 7);
        assert_eq!(counter.value(), 7);
    }
}
