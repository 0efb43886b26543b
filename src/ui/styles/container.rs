// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::PI;

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Purple-to-pink page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_dark(is_dark(theme));
    let gradient = Linear::new(Radians(PI))
        .add_stop(0.0, scheme.page_top)
        .add_stop(1.0, scheme.page_bottom);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Rounded white (or dark) card holding a page section.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_dark(is_dark(theme));
    let surface = scheme.surface;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Generic panel surface used by the settings screen.
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tinted banner behind the hero glyph and carousel slides.
pub fn hero(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_dark(is_dark(theme));
    let gradient = Linear::new(Radians(PI / 2.0))
        .add_stop(0.0, Color { a: 0.6, ..scheme.heading })
        .add_stop(1.0, Color { a: 0.6, ..scheme.accent });

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme_brightness() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn panel_is_slightly_translucent() {
        match panel(&Theme::Light).background {
            Some(Background::Color(color)) => assert!((color.a - opacity::SURFACE).abs() < f32::EPSILON),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn page_uses_gradient() {
        assert!(matches!(
            page(&Theme::Dark).background,
            Some(Background::Gradient(_))
        ));
    }
}
