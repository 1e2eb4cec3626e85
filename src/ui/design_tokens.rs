// SPDX-License-Identifier: MPL-2.0
//! Shared visual constants.
//!
//! Views and styles read colors and measurements from here instead of using
//! literals, so the single screen keeps one rhythm. Spacing sits on a 4px
//! grid.
//!
//! ```
//! use wallgen_client::ui::design_tokens::{palette, spacing};
//!
//! let accent = palette::PRIMARY_500;
//! assert!(spacing::MD > spacing::SM);
//! # let _ = accent;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.13);
    pub const GRAY_700: Color = Color::from_rgb(0.27, 0.29, 0.31);
    pub const GRAY_600: Color = Color::from_rgb(0.34, 0.36, 0.38);
    /// Secondary text and idle outlines.
    pub const GRAY_400: Color = Color::from_rgb(0.47, 0.49, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.8, 0.82);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.91, 0.92);

    /// Teal accent used for the generate action and the drop highlight.
    pub const PRIMARY_100: Color = Color::from_rgb(0.82, 0.95, 0.94);
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.7, 0.68);
    pub const PRIMARY_500: Color = Color::from_rgb(0.08, 0.6, 0.58);
    pub const PRIMARY_600: Color = Color::from_rgb(0.05, 0.49, 0.47);

    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.23, 0.24);
    pub const WARNING_500: Color = Color::from_rgb(0.93, 0.6, 0.1);
    pub const SUCCESS_500: Color = Color::from_rgb(0.25, 0.66, 0.36);
}

pub mod opacity {
    /// Drop-zone tint while a file hovers the window.
    pub const TINT: f32 = 0.25;
    /// Hover wash on borderless buttons.
    pub const WASH: f32 = 0.15;
    /// Panel surfaces.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// The page column never grows wider than this.
    pub const CONTENT_MAX_WIDTH: f32 = 880.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DROP_ZONE_HEIGHT: f32 = 180.0;
    pub const GALLERY_CARD_WIDTH: f32 = 260.0;
    /// 16:9 at card width, minus the card padding.
    pub const GALLERY_PREVIEW_HEIGHT: f32 = 137.0;
    pub const SPINNER: f32 = 20.0;
}

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 28.0;
    /// Drop-zone prompt.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers and toast markers.
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.3);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADE,
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 10.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::GALLERY_CARD_WIDTH < sizing::CONTENT_MAX_WIDTH);
    assert!(sizing::TOAST_WIDTH < sizing::CONTENT_MAX_WIDTH);
};
