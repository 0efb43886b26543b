// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - The cat information page (hero, tabs, fact of the day, quiz, gallery)
//! - [`settings`] - Application preferences and diagnostics export
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Title bar with the dark-mode switch
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod header;
pub mod home;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
