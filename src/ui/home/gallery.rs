// SPDX-License-Identifier: MPL-2.0
//! Static gallery of cats looking for a home.

use crate::domain::content::{AdoptableCat, ADOPTABLE_CATS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

fn card<'a, Message: 'a>(i18n: &'a I18n, cat: &'a AdoptableCat) -> Element<'a, Message> {
    let age = cat.age_years.to_string();
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(Text::new("🐈").size(typography::DISPLAY))
            .push(Text::new(cat.name).size(typography::TITLE_SM))
            .push(
                Text::new(i18n.tr_with_args("adopt-age", &[("years", age.as_str())]))
                    .size(typography::CAPTION),
            )
            .push(Text::new(i18n.tr(cat.temperament_key)).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::GALLERY_CARD_WIDTH))
    .style(styles::container::panel)
    .into()
}

pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let cards = ADOPTABLE_CATS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, cat| {
            row.push(card(i18n, cat))
        })
        .wrap();

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("adopt-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("adopt-intro")))
        .push(cards)
        .into()
}
