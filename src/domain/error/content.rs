// SPDX-License-Identifier: MPL-2.0
//! Errors raised while assembling page content.

use std::fmt;

/// Content precondition violations detected at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A fact deck was built from an empty list.
    EmptyFactDeck,

    /// A custom fact entry contained only whitespace.
    BlankFact {
        /// Zero-based position of the offending entry.
        index: usize,
    },
}

impl ContentError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContentError::EmptyFactDeck => "notification-facts-empty",
            ContentError::BlankFact { .. } => "notification-facts-blank",
        }
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::EmptyFactDeck => write!(f, "fact deck must contain at least one fact"),
            ContentError::BlankFact { index } => write!(f, "fact #{} is blank", index + 1),
        }
    }
}

impl std::error::Error for ContentError {}
