// SPDX-License-Identifier: MPL-2.0
//! Submit-time preconditions.

use super::options::ResolutionChoices;
use super::selection::Selection;
use std::fmt;

/// Why a generation request cannot be issued yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No image has been staged.
    NoSelection,
    /// No resolution checkbox is checked.
    NoResolution,
}

impl ValidationError {
    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NoSelection => "notification-no-selection",
            ValidationError::NoResolution => "notification-no-resolution",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoSelection => write!(f, "no image selected"),
            ValidationError::NoResolution => write!(f, "no resolution selected"),
        }
    }
}

/// Checks the preconditions in order: selection first, then resolutions.
///
/// # Errors
///
/// Returns the first failing precondition.
pub fn validate<'a>(
    selection: Option<&'a Selection>,
    choices: &ResolutionChoices,
) -> Result<&'a Selection, ValidationError> {
    let selection = selection.ok_or(ValidationError::NoSelection)?;
    if choices.is_empty() {
        return Err(ValidationError::NoResolution);
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::options::ResolutionOptions;
    use crate::workflow::selection::IncomingFile;

    fn selection() -> Selection {
        IncomingFile::new("photo.png", "image/png", vec![1]).into()
    }

    fn choices(checked: bool) -> ResolutionChoices {
        let ids = vec!["4k".to_string()];
        let initially = if checked { ids.clone() } else { Vec::new() };
        ResolutionOptions::new(ids, &initially).choices()
    }

    #[test]
    fn missing_selection_is_reported_first() {
        assert_eq!(
            validate(None, &choices(false)),
            Err(ValidationError::NoSelection)
        );
    }

    #[test]
    fn missing_resolution_is_reported() {
        let selection = selection();
        assert_eq!(
            validate(Some(&selection), &choices(false)),
            Err(ValidationError::NoResolution)
        );
    }

    #[test]
    fn passes_with_selection_and_resolution() {
        let selection = selection();
        let validated = validate(Some(&selection), &choices(true)).expect("valid");
        assert_eq!(validated.name(), "photo.png");
    }

    #[test]
    fn i18n_keys_are_distinct() {
        assert_ne!(
            ValidationError::NoSelection.i18n_key(),
            ValidationError::NoResolution.i18n_key()
        );
    }
}
