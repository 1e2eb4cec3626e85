// SPDX-License-Identifier: MPL-2.0
//! Resolution checkboxes and the choice set derived from them.

use crate::generation::resolution::Resolution;

/// One checkbox in the resolution picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOption {
    id: String,
    checked: bool,
}

impl ResolutionOption {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Parsed dimensions when the identifier uses the `WIDTHxHEIGHT` form.
    #[must_use]
    pub fn dimensions(&self) -> Option<Resolution> {
        self.id.parse().ok()
    }
}

/// The resolution checkboxes, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionOptions {
    options: Vec<ResolutionOption>,
}

impl ResolutionOptions {
    /// Builds the option list. Duplicate identifiers keep their first position.
    pub fn new<I, S>(ids: I, initially_checked: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<ResolutionOption> = Vec::new();
        for id in ids {
            let id = id.into();
            if options.iter().any(|o| o.id == id) {
                continue;
            }
            let checked = initially_checked.contains(&id);
            options.push(ResolutionOption { id, checked });
        }
        Self { options }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolutionOption> {
        self.options.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Sets the checked state of the option at `index`. Out-of-range indices are ignored.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(option) = self.options.get_mut(index) {
            option.checked = checked;
        }
    }

    /// Reads the currently checked identifiers, in display order.
    #[must_use]
    pub fn choices(&self) -> ResolutionChoices {
        ResolutionChoices(
            self.options
                .iter()
                .filter(|o| o.checked)
                .map(|o| o.id.clone())
                .collect(),
        )
    }
}

/// Resolution identifiers chosen for one submission, in display order.
///
/// Never stored between submissions: it is recomputed from the checkboxes
/// every time generation is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionChoices(Vec<String>);

impl ResolutionChoices {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn choices_follow_display_order_not_toggle_order() {
        let mut options = ResolutionOptions::new(ids(&["720p", "1080p", "4k"]), &[]);
        options.set_checked(2, true);
        options.set_checked(0, true);

        assert_eq!(options.choices().as_slice(), ids(&["720p", "4k"]).as_slice());
    }

    #[test]
    fn initially_checked_are_applied() {
        let options =
            ResolutionOptions::new(ids(&["1920x1080", "2560x1440"]), &ids(&["2560x1440"]));
        let checked: Vec<bool> = options.iter().map(ResolutionOption::is_checked).collect();
        assert_eq!(checked, vec![false, true]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let options = ResolutionOptions::new(ids(&["4k", "1080p", "4k"]), &[]);
        let listed: Vec<&str> = options.iter().map(ResolutionOption::id).collect();
        assert_eq!(listed, vec!["4k", "1080p"]);
    }

    #[test]
    fn unchecking_everything_yields_empty_choices() {
        let mut options = ResolutionOptions::new(ids(&["4k"]), &ids(&["4k"]));
        assert!(!options.choices().is_empty());
        options.set_checked(0, false);
        assert!(options.choices().is_empty());
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut options = ResolutionOptions::new(ids(&["4k"]), &[]);
        options.set_checked(5, true);
        assert!(options.choices().is_empty());
    }

    #[test]
    fn dimensions_only_for_width_by_height_ids() {
        let options = ResolutionOptions::new(ids(&["1080x2400", "4k"]), &[]);
        let dims: Vec<Option<Resolution>> = options.iter().map(ResolutionOption::dimensions).collect();
        assert_eq!(dims, vec![Some(Resolution::new(1080, 2400)), None]);
    }
}
