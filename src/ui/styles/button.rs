// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn outline(color: Color) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    }
}

/// The generate action. Its disabled look doubles as the busy state.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge, lift) = match status {
        button::Status::Active => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_600, shadow::NONE),
        button::Status::Disabled => {
            let muted = if theme.extended_palette().is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            };
            return button::Style {
                background: Some(Background::Color(muted)),
                text_color: palette::GRAY_400,
                border: outline(palette::GRAY_400),
                shadow: shadow::NONE,
                snap: true,
            };
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: outline(edge),
        shadow: lift,
        snap: true,
    }
}

/// Browse and download buttons.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let dark = theme.extended_palette().is_dark;
    let (fill, text_color) = if dark {
        (palette::GRAY_700, palette::WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if dark {
                palette::GRAY_600
            } else {
                palette::GRAY_200
            })),
            text_color,
            border: outline(palette::PRIMARY_500),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(fill)),
            text_color: palette::GRAY_400,
            border: outline(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(fill)),
            text_color,
            border: outline(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless close button on toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.palette().text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::WASH,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
