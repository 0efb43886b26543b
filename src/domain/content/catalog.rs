// SPDX-License-Identifier: MPL-2.0
//! Static content arrays for the informational panels, carousel and gallery.

/// A popular breed shown in the "Popular Breeds" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    /// Breed name (proper noun, not translated).
    pub name: &'static str,
    /// Message key of the short description.
    pub description_key: &'static str,
}

/// One slide of the image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Decorative glyph drawn in place of a photo.
    pub glyph: &'static str,
    /// Message key of the caption.
    pub caption_key: &'static str,
}

/// A cat card in the static adoption gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdoptableCat {
    pub name: &'static str,
    pub age_years: u8,
    /// Message key of the temperament blurb.
    pub temperament_key: &'static str,
}

pub static BREEDS: [Breed; 5] = [
    Breed {
        name: "Siamese",
        description_key: "breed-siamese",
    },
    Breed {
        name: "Persian",
        description_key: "breed-persian",
    },
    Breed {
        name: "Maine Coon",
        description_key: "breed-maine-coon",
    },
    Breed {
        name: "Bengal",
        description_key: "breed-bengal",
    },
    Breed {
        name: "Scottish Fold",
        description_key: "breed-scottish-fold",
    },
];

/// Message keys of the "Characteristics" list.
pub static CHARACTERISTICS: [&str; 4] = [
    "trait-hunters",
    "trait-reflexes",
    "trait-senses",
    "trait-communication",
];

pub static CAROUSEL_SLIDES: [Slide; 4] = [
    Slide {
        glyph: "🐈",
        caption_key: "slide-stretch",
    },
    Slide {
        glyph: "🐾",
        caption_key: "slide-paws",
    },
    Slide {
        glyph: "😺",
        caption_key: "slide-smile",
    },
    Slide {
        glyph: "🧶",
        caption_key: "slide-yarn",
    },
];

pub static ADOPTABLE_CATS: [AdoptableCat; 4] = [
    AdoptableCat {
        name: "Whiskers",
        age_years: 2,
        temperament_key: "adopt-playful",
    },
    AdoptableCat {
        name: "Mittens",
        age_years: 4,
        temperament_key: "adopt-calm",
    },
    AdoptableCat {
        name: "Shadow",
        age_years: 1,
        temperament_key: "adopt-curious",
    },
    AdoptableCat {
        name: "Luna",
        age_years: 7,
        temperament_key: "adopt-cuddly",
    },
];
