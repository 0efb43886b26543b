// SPDX-License-Identifier: MPL-2.0
//! "What sound does a cat make?" quiz.

use crate::config::QUIZ_ANSWER;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizResult {
    Correct,
    Incorrect,
}

/// Checks an answer with a case-insensitive exact match.
///
/// Whitespace is significant: `" meow"` is incorrect.
///
/// ```
/// use feline_fascination::ui::home::quiz::{evaluate_answer, QuizResult};
///
/// assert_eq!(evaluate_answer("MEOW"), QuizResult::Correct);
/// assert_eq!(evaluate_answer("purr"), QuizResult::Incorrect);
/// ```
#[must_use]
pub fn evaluate_answer(answer: &str) -> QuizResult {
    if answer.eq_ignore_ascii_case(QUIZ_ANSWER) {
        QuizResult::Correct
    } else {
        QuizResult::Incorrect
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    answer: String,
    result: Option<QuizResult>,
}

impl State {
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Result of the last submission, cleared when the answer is edited.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.result
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    AnswerChanged(String),
    Submit,
}

/// Returns the result when the message was a submission.
pub fn update(state: &mut State, message: Message) -> Option<QuizResult> {
    match message {
        Message::AnswerChanged(answer) => {
            state.answer = answer;
            state.result = None;
            None
        }
        Message::Submit => {
            let result = evaluate_answer(&state.answer);
            state.result = Some(result);
            Some(result)
        }
    }
}

pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("quiz-placeholder"), &state.answer)
        .on_input(Message::AnswerChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::QUIZ_INPUT_WIDTH));

    let submit = button(Text::new(i18n.tr("quiz-submit")))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("quiz-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("quiz-question")).size(typography::BODY_LG))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(input)
                .push(submit),
        );

    if let Some(result) = state.result {
        let (key, color) = match result {
            QuizResult::Correct => ("quiz-correct", palette::SUCCESS_500),
            QuizResult::Incorrect => ("quiz-incorrect", palette::ERROR_500),
        };
        column = column.push(Text::new(i18n.tr(key)).color(color));
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_casing_of_meow_is_correct() {
        for answer in ["meow", "Meow", "MEOW", "mEoW"] {
            assert_eq!(evaluate_answer(answer), QuizResult::Correct, "{answer}");
        }
    }

    #[test]
    fn other_answers_are_incorrect() {
        for answer in ["purr", "", "meoww", " meow", "meow ", "m e o w"] {
            assert_eq!(evaluate_answer(answer), QuizResult::Incorrect, "{answer:?}");
        }
    }

    #[test]
    fn submit_records_result() {
        let mut state = State::default();
        update(&mut state, Message::AnswerChanged("Meow".into()));
        assert_eq!(update(&mut state, Message::Submit), Some(QuizResult::Correct));
        assert_eq!(state.result(), Some(QuizResult::Correct));
    }

    #[test]
    fn editing_clears_previous_result() {
        let mut state = State::default();
        update(&mut state, Message::AnswerChanged("bark".into()));
        update(&mut state, Message::Submit);
        assert_eq!(state.result(), Some(QuizResult::Incorrect));

        assert_eq!(update(&mut state, Message::AnswerChanged("bar".into())), None);
        assert_eq!(state.result(), None);
        assert_eq!(state.answer(), "bar");
    }

    #[test]
    fn empty_submission_is_incorrect() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Submit), Some(QuizResult::Incorrect));
    }
}
