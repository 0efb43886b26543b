// SPDX-License-Identifier: MPL-2.0
//! Informational tabs: About, Characteristics and Popular Breeds.

use crate::domain::content::{BREEDS, CHARACTERISTICS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Font, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    #[default]
    About,
    Characteristics,
    Breeds,
}

impl InfoTab {
    /// All tabs in display order.
    pub const ALL: [InfoTab; 3] = [InfoTab::About, InfoTab::Characteristics, InfoTab::Breeds];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            InfoTab::About => "tab-about",
            InfoTab::Characteristics => "tab-characteristics",
            InfoTab::Breeds => "tab-breeds",
        }
    }

    /// Stable name used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InfoTab::About => "about",
            InfoTab::Characteristics => "characteristics",
            InfoTab::Breeds => "breeds",
        }
    }
}

pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    active: InfoTab,
    on_select: fn(InfoTab) -> Message,
) -> Element<'a, Message> {
    let header = InfoTab::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &tab| {
            let style = if tab == active {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(i18n.tr(tab.i18n_key())))
                    .on_press(on_select(tab))
                    .padding([spacing::XS, spacing::MD])
                    .style(style),
            )
        });

    let panel: Element<'a, Message> = match active {
        InfoTab::About => Text::new(i18n.tr("about-body"))
            .size(typography::BODY_LG)
            .into(),
        InfoTab::Characteristics => CHARACTERISTICS
            .iter()
            .fold(Column::new().spacing(spacing::XS), |column, key| {
                column.push(Text::new(format!("• {}", i18n.tr(key))))
            })
            .into(),
        InfoTab::Breeds => BREEDS
            .iter()
            .fold(Column::new().spacing(spacing::SM), |column, breed| {
                column.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(breed.name).size(typography::TITLE_SM).font(Font {
                            weight: Weight::Bold,
                            ..Font::default()
                        }))
                        .push(Text::new(i18n.tr(breed.description_key))),
                )
            })
            .into(),
    };

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(header)
        .push(panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_the_default_tab() {
        assert_eq!(InfoTab::default(), InfoTab::About);
    }

    #[test]
    fn tab_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            InfoTab::ALL.iter().map(|tab| tab.i18n_key()).collect();
        assert_eq!(keys.len(), InfoTab::ALL.len());
    }
}
