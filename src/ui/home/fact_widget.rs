// SPDX-License-Identifier: MPL-2.0
//! "Did you know?" card showing the current fact and its progress bar.

use crate::domain::content::{Fact, FactDeck};
use crate::i18n::fluent::I18n;
use crate::rotation::RotationState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{progress_bar, Column, Text};
use iced::{Element, Length};

/// Resolves a fact to display text in the active locale.
#[must_use]
pub fn fact_text(i18n: &I18n, fact: &Fact) -> String {
    match fact {
        Fact::Localized(key) => i18n.tr(key),
        Fact::Text(text) => text.clone(),
    }
}

pub fn view<'a, Message: 'a>(
    i18n: &'a I18n,
    deck: &'a FactDeck,
    rotation: &RotationState,
) -> Element<'a, Message> {
    let fact = fact_text(i18n, deck.get(rotation.current_index()));
    let counter = format!(
        "{} / {}",
        rotation.current_index() + 1,
        rotation.len().get()
    );

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("fact-title")).size(typography::TITLE_MD))
        .push(Text::new(fact).size(typography::BODY_LG))
        .push(
            progress_bar(0.0..=1.0, rotation.progress().as_fraction())
                .girth(Length::Fixed(sizing::PROGRESS_HEIGHT)),
        )
        .push(Text::new(counter).size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_facts_are_shown_verbatim() {
        let i18n = I18n::default();
        let fact = Fact::Text("Cats have five toes on front paws.".into());
        assert_eq!(fact_text(&i18n, &fact), "Cats have five toes on front paws.");
    }

    #[test]
    fn builtin_facts_are_translated() {
        let i18n = I18n::default();
        let text = fact_text(&i18n, &Fact::Localized("fact-sleep"));
        assert!(!text.starts_with("MISSING"));
    }
}
