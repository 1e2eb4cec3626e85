// SPDX-License-Identifier: MPL-2.0
//! Resolution identifiers.
//!
//! The service accepts opaque identifiers. The common `WIDTHxHEIGHT` form is
//! parsed here so the picker can describe an option; anything else
//! (`1080p`, `4k`) is passed through untouched.

use std::fmt;
use std::str::FromStr;

/// A `width x height` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Screen orientation implied by a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Returns the i18n message key for this orientation.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Orientation::Landscape => "resolution-landscape",
            Orientation::Portrait => "resolution-portrait",
            Orientation::Square => "resolution-square",
        }
    }
}

impl Resolution {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        match self.width.cmp(&self.height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Why a `WIDTHxHEIGHT` string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionParseError {
    /// Not exactly two `x`-separated parts.
    Format(String),
    /// Width is not a positive integer.
    Width(String),
    /// Height is not a positive integer.
    Height(String),
}

impl fmt::Display for ResolutionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionParseError::Format(s) => write!(f, "invalid resolution format: {s}"),
            ResolutionParseError::Width(s) => write!(f, "invalid width in resolution {s}"),
            ResolutionParseError::Height(s) => write!(f, "invalid height in resolution {s}"),
        }
    }
}

impl std::error::Error for ResolutionParseError {}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut dims = trimmed.split(['x', 'X']);
        let (Some(width), Some(height), None) = (dims.next(), dims.next(), dims.next()) else {
            return Err(ResolutionParseError::Format(trimmed.to_string()));
        };

        let width = width
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| ResolutionParseError::Width(trimmed.to_string()))?;
        let height = height
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| ResolutionParseError::Height(trimmed.to_string()))?;

        Ok(Self { width, height })
    }
}

/// Splits a comma-separated identifier list, trimming entries and skipping empty ones.
///
/// Identifiers are not required to be in `WIDTHxHEIGHT` form.
#[must_use]
pub fn split_identifiers(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_width_by_height() {
        let res: Resolution = "1920x1080".parse().expect("valid");
        assert_eq!(res, Resolution::new(1920, 1080));
        assert_eq!(res.to_string(), "1920x1080");
    }

    #[test]
    fn tolerates_whitespace_and_uppercase_separator() {
        let res: Resolution = " 1440 X 3200 ".parse().expect("valid");
        assert_eq!(res, Resolution::new(1440, 3200));
    }

    #[test]
    fn rejects_named_identifiers() {
        assert!(matches!(
            "1080p".parse::<Resolution>(),
            Err(ResolutionParseError::Format(_))
        ));
        assert!(matches!(
            "4k".parse::<Resolution>(),
            Err(ResolutionParseError::Format(_))
        ));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            "abcx1080".parse::<Resolution>(),
            Err(ResolutionParseError::Width(_))
        ));
        assert!(matches!(
            "1920x0".parse::<Resolution>(),
            Err(ResolutionParseError::Height(_))
        ));
        assert!(matches!(
            "1x2x3".parse::<Resolution>(),
            Err(ResolutionParseError::Format(_))
        ));
    }

    #[test]
    fn orientation_follows_aspect() {
        assert_eq!(
            Resolution::new(1920, 1080).orientation(),
            Orientation::Landscape
        );
        assert_eq!(
            Resolution::new(1080, 2400).orientation(),
            Orientation::Portrait
        );
        assert_eq!(Resolution::new(512, 512).orientation(), Orientation::Square);
    }

    #[test]
    fn split_identifiers_skips_blanks() {
        assert_eq!(
            split_identifiers(" 1920x1080, ,4k,,1080p "),
            vec!["1920x1080", "4k", "1080p"]
        );
        assert!(split_identifiers("").is_empty());
    }
}
