// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(background: Color, border_color: Color, pill: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: if pill { radius::FULL } else { radius::MD }.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Main call-to-action button (quiz submit, learn more).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(palette::PRIMARY_500, palette::PRIMARY_600, false),
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..filled(palette::PRIMARY_400, palette::PRIMARY_500, false)
        },
        button::Status::Pressed => filled(palette::PRIMARY_700, palette::PRIMARY_700, false),
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            shadow: shadow::NONE,
            ..filled(palette::GRAY_200, palette::GRAY_400, false)
        },
    }
}

/// Pink pill used by the like button.
pub fn like(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            shadow: shadow::MD,
            ..filled(palette::ACCENT_600, palette::ACCENT_600, true)
        },
        _ => filled(palette::ACCENT_500, palette::ACCENT_600, true),
    }
}

/// Style for the active tab or the selected settings option.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };
    button::Style {
        shadow: shadow::NONE,
        ..filled(background, palette::PRIMARY_700, false)
    }
}

/// Style for inactive tabs and options. Follows the theme palette.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_400
        },
        button::Status::Pressed => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_400
        },
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: extended.background.base.text,
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless round button used for carousel arrows and toast dismiss.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
