// SPDX-License-Identifier: MPL-2.0
//! Theme selection from `[general] theme_mode`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follows the desktop preference, read once at startup.
    #[default]
    System,
}

impl ThemeMode {
    /// `System` falls back to dark when the desktop cannot be queried.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => false,
                Ok(_) => true,
                Err(err) => {
                    tracing::debug!(error = ?err, "theme detection failed");
                    true
                }
            },
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_desktop() {
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), iced::Theme::Dark);
    }

    #[test]
    fn settings_default_to_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
