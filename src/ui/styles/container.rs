// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface behind the resolution picker and the results region.
///
/// Derived from the theme's weak background so panels read in both modes.
pub fn panel(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..weak
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop target. Tinted with the accent while a file hovers the window.
pub fn drop_zone(hovering: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let (border_color, fill) = if hovering {
            (
                palette::PRIMARY_500,
                Color {
                    a: opacity::TINT,
                    ..palette::PRIMARY_100
                },
            )
        } else {
            (
                palette::GRAY_400,
                theme.extended_palette().background.base.color,
            )
        };

        container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// One gallery card.
pub fn card(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background;

    container::Style {
        background: Some(Background::Color(background.base.color)),
        border: Border {
            color: background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Toast card outlined in its severity accent.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_zone_highlights_while_hovering() {
        let theme = Theme::Dark;
        let idle = drop_zone(false)(&theme);
        let hovering = drop_zone(true)(&theme);

        assert_eq!(hovering.border.color, palette::PRIMARY_500);
        assert_ne!(idle.border.color, hovering.border.color);
        assert_ne!(idle.background, hovering.background);
    }

    #[test]
    fn panel_is_slightly_translucent() {
        match panel(&Theme::Light).background {
            Some(Background::Color(color)) => {
                assert!((color.a - opacity::SURFACE).abs() < f32::EPSILON);
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn toast_border_carries_the_accent() {
        let style = toast(palette::ERROR_500)(&Theme::Light);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }
}
