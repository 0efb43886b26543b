// SPDX-License-Identifier: MPL-2.0
//! Page content types.
//!
//! Static content is described by i18n message keys so it follows the
//! active locale. Only custom fact decks carry literal text.

mod catalog;
mod facts;

pub use catalog::{
    AdoptableCat, Breed, Slide, ADOPTABLE_CATS, BREEDS, CAROUSEL_SLIDES, CHARACTERISTICS,
};
pub use facts::{Fact, FactDeck, BUILTIN_FACT_KEYS};
