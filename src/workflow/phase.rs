// SPDX-License-Identifier: MPL-2.0
//! UI phase and the generate action control.

/// Discrete interaction state governing control enablement and panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing staged yet.
    #[default]
    Idle,
    /// An image is staged; generation can be requested.
    Ready,
    /// A request is in flight.
    Submitting,
    /// The last request produced results (transient, collapses to `Ready`).
    SettledSuccess,
    /// The last request failed (transient, collapses to `Ready`).
    SettledError,
}

impl Phase {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == Phase::Submitting
    }
}

/// State of the generate button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionControl {
    enabled: bool,
    busy: bool,
}

impl Default for ActionControl {
    fn default() -> Self {
        Self::interactive()
    }
}

impl ActionControl {
    /// Enabled, showing the regular label.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            enabled: true,
            busy: false,
        }
    }

    /// Disabled, showing the busy label.
    #[must_use]
    pub fn busy() -> Self {
        Self {
            enabled: false,
            busy: true,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        self.busy
    }

    /// Returns the i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        if self.busy {
            "generate-button-busy"
        } else {
            "generate-button"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_control_is_interactive() {
        let control = ActionControl::default();
        assert!(control.is_enabled());
        assert_eq!(control.label_key(), "generate-button");
    }

    #[test]
    fn busy_control_is_disabled_with_busy_label() {
        let control = ActionControl::busy();
        assert!(!control.is_enabled());
        assert_eq!(control.label_key(), "generate-button-busy");
    }

    #[test]
    fn only_submitting_is_submitting() {
        assert!(Phase::Submitting.is_submitting());
        assert!(!Phase::Ready.is_submitting());
        assert!(!Phase::SettledError.is_submitting());
    }
}
