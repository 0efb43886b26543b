// SPDX-License-Identifier: MPL-2.0
//! Home screen: the cat information page.
//!
//! The page owns the small interactive state (likes, quiz, active tab and
//! carousel position). The rotating fact is owned by the application's
//! [`RotationTimer`](crate::rotation::RotationTimer) and only read here.

pub mod carousel;
pub mod fact_widget;
pub mod gallery;
pub mod hero;
pub mod quiz;
pub mod tabs;

pub use hero::LikeCounter;
pub use quiz::{evaluate_answer, QuizResult};
pub use tabs::InfoTab;

use crate::domain::content::FactDeck;
use crate::i18n::fluent::I18n;
use crate::rotation::RotationState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Page state lost on restart.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub likes: LikeCounter,
    pub quiz: quiz::State,
    pub active_tab: InfoTab,
    pub carousel: carousel::State,
}

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub deck: &'a FactDeck,
    pub rotation: &'a RotationState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Like,
    SelectTab(InfoTab),
    Carousel(carousel::Message),
    Quiz(quiz::Message),
    LearnMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Liked(u32),
    QuizAnswered(QuizResult),
    TabSelected(InfoTab),
    CarouselMoved(carousel::Message),
    LearnMore,
}

/// Process a home message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Like => Event::Liked(state.likes.like()),
        Message::SelectTab(tab) => {
            state.active_tab = tab;
            Event::TabSelected(tab)
        }
        Message::Carousel(direction) => {
            carousel::update(&mut state.carousel, direction);
            Event::CarouselMoved(direction)
        }
        Message::Quiz(message) => match quiz::update(&mut state.quiz, message) {
            Some(result) => Event::QuizAnswered(result),
            None => Event::None,
        },
        Message::LearnMore => Event::LearnMore,
    }
}

fn section<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Render the home screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let intro = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("page-heading")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("page-subtitle")).size(typography::BODY_LG));

    let learn_more = button(Text::new(i18n.tr("learn-more-button")))
        .on_press(Message::LearnMore)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let closing = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("closing-text")).size(typography::BODY_LG))
        .push(learn_more);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(intro)
        .push(section(hero::view(i18n, state.likes, Message::Like)))
        .push(section(
            carousel::view(i18n, state.carousel).map(Message::Carousel),
        ))
        .push(section(tabs::view(i18n, state.active_tab, Message::SelectTab)))
        .push(section(fact_widget::view(i18n, ctx.deck, ctx.rotation)))
        .push(section(quiz::view(i18n, &state.quiz).map(Message::Quiz)))
        .push(section(gallery::view(i18n)))
        .push(closing);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_reports_running_total() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Like), Event::Liked(1));
        assert_eq!(update(&mut state, Message::Like), Event::Liked(2));
        assert_eq!(state.likes.value(), 2);
    }

    #[test]
    fn select_tab_changes_active_tab() {
        let mut state = State::default();
        let event = update(&mut state, Message::SelectTab(InfoTab::Breeds));
        assert_eq!(event, Event::TabSelected(InfoTab::Breeds));
        assert_eq!(state.active_tab, InfoTab::Breeds);
    }

    #[test]
    fn quiz_submission_surfaces_result() {
        let mut state = State::default();
        let typed = update(
            &mut state,
            Message::Quiz(quiz::Message::AnswerChanged("MEOW".into())),
        );
        assert_eq!(typed, Event::None);
        let submitted = update(&mut state, Message::Quiz(quiz::Message::Submit));
        assert_eq!(submitted, Event::QuizAnswered(QuizResult::Correct));
    }

    #[test]
    fn carousel_moves_and_reports_direction() {
        let mut state = State::default();
        let event = update(&mut state, Message::Carousel(carousel::Message::Next));
        assert_eq!(event, Event::CarouselMoved(carousel::Message::Next));
        assert_eq!(state.carousel.index(), 1);
    }
}
