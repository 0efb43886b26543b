// SPDX-License-Identifier: MPL-2.0
//! `feline_fascination` is a small informational page about cats built with
//! the Iced GUI framework.
//!
//! It shows a rotating "fact of the day" with a progress bar, a like counter,
//! a quiz, informational tabs and an adoption gallery, and demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/feline_fascination/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod rotation;
pub mod ui;
