// SPDX-License-Identifier: MPL-2.0
//! Fact deck shown by the rotating "fact of the day" widget.

use crate::domain::error::ContentError;
use std::num::NonZeroUsize;

/// Message keys of the built-in facts, in display order.
pub const BUILTIN_FACT_KEYS: [&str; 8] = [
    "fact-sleep",
    "fact-purr",
    "fact-whiskers",
    "fact-jump",
    "fact-nose",
    "fact-meow",
    "fact-sweet",
    "fact-ears",
];

/// A single fact. No identity beyond its position in the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// Built-in fact resolved through the active locale.
    Localized(&'static str),
    /// Literal text from a custom deck.
    Text(String),
}

/// Ordered, non-empty sequence of facts.
///
/// The deck is fixed once built; the rotation timer only ever reads it by
/// index, so emptiness is rejected here rather than at every lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactDeck {
    facts: Vec<Fact>,
}

impl FactDeck {
    /// Builds a deck, failing fast when `facts` is empty.
    pub fn new(facts: Vec<Fact>) -> Result<Self, ContentError> {
        if facts.is_empty() {
            return Err(ContentError::EmptyFactDeck);
        }
        Ok(Self { facts })
    }

    /// Builds a deck from literal strings. Blank entries are rejected.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let facts = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let text = text.into();
                if text.trim().is_empty() {
                    Err(ContentError::BlankFact { index })
                } else {
                    Ok(Fact::Text(text))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(facts)
    }

    /// The localized deck shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            facts: BUILTIN_FACT_KEYS.iter().copied().map(Fact::Localized).collect(),
        }
    }

    /// Number of facts, never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.facts.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the fact at `index`, wrapping around the deck.
    #[must_use]
    pub fn get(&self, index: usize) -> &Fact {
        &self.facts[index % self.facts.len()]
    }

    /// Iterates over the facts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }
}

impl Default for FactDeck {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(FactDeck::new(Vec::new()), Err(ContentError::EmptyFactDeck));
        assert_eq!(
            FactDeck::from_texts(Vec::<String>::new()),
            Err(ContentError::EmptyFactDeck)
        );
    }

    #[test]
    fn blank_entries_are_rejected_with_position() {
        let result = FactDeck::from_texts(["Cats nap.", "   "]);
        assert_eq!(result, Err(ContentError::BlankFact { index: 1 }));
    }

    #[test]
    fn builtin_deck_uses_every_key_in_order() {
        let deck = FactDeck::builtin();
        assert_eq!(deck.len().get(), BUILTIN_FACT_KEYS.len());
        assert_eq!(deck.get(0), &Fact::Localized("fact-sleep"));
        assert_eq!(deck.get(7), &Fact::Localized("fact-ears"));
    }

    #[test]
    fn get_wraps_around() {
        let deck = FactDeck::from_texts(["a", "b"]).expect("valid deck");
        assert_eq!(deck.get(2), &Fact::Text("a".into()));
        assert_eq!(deck.get(5), &Fact::Text("b".into()));
    }
}
