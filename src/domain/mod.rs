// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core page rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`content`]: Page content types ([`Fact`](content::Fact), [`FactDeck`](content::FactDeck),
//!   [`Breed`](content::Breed))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`ContentError`](error::ContentError))
//! - [`rotation`]: Fact rotation value objects ([`Progress`](rotation::Progress),
//!   [`FactInterval`](rotation::FactInterval))

pub mod content;
pub mod diagnostics;
pub mod error;
pub mod rotation;
