// SPDX-License-Identifier: MPL-2.0
//! Phase transitions of the generation workflow.
//!
//! [`Controller`] owns the single Selection cell, the resolution options, the
//! action control, and the gallery. Every user event and every async result
//! maps to exactly one method call here, which keeps the state machine
//! testable without a window.

use super::gallery::Gallery;
use super::options::ResolutionOptions;
use super::phase::{ActionControl, Phase};
use super::selection::{IncomingFile, Selection};
use super::validation::{self, ValidationError};
use crate::generation::{GenerateResult, GeneratedImage, GenerationRequest};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Identifies one submission attempt.
///
/// Async results carry the ticket they were issued for, so anything arriving
/// for an older submission can be told apart and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A file was offered but cannot become the Selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    NotAnImage { media_type: String },
}

impl AcquireError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AcquireError::NotAnImage { .. } => "notification-not-an-image",
        }
    }
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquireError::NotAnImage { media_type } => {
                write!(f, "declared type '{media_type}' is not an image")
            }
        }
    }
}

/// Generation was requested but no request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The action control is disabled (a request is already in flight).
    ActionDisabled,
    /// A precondition failed.
    Invalid(ValidationError),
}

impl SubmitError {
    /// Message key for the user, if this outcome should be surfaced.
    #[must_use]
    pub fn i18n_key(self) -> Option<&'static str> {
        match self {
            SubmitError::ActionDisabled => None,
            SubmitError::Invalid(err) => Some(err.i18n_key()),
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(err: ValidationError) -> Self {
        SubmitError::Invalid(err)
    }
}

/// A request ready to be sent, tagged with its ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: GenerationRequest,
}

/// What [`Controller::settle`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The gallery now shows `count` entries.
    Rendered { count: usize },
    /// The request failed; the user should see the generic error message.
    Failed,
    /// The response belongs to a submission that is no longer in flight.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    selection: Option<Selection>,
    options: ResolutionOptions,
    phase: Phase,
    action: ActionControl,
    progress_visible: bool,
    drag_over: bool,
    gallery: Gallery,
    next_ticket: u64,
    in_flight: Option<Ticket>,
    results_ticket: Option<Ticket>,
}

impl Controller {
    #[must_use]
    pub fn new(options: ResolutionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Offers a file from a drop or picker event.
    ///
    /// On acceptance the previous Selection is replaced entirely. On rejection
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AcquireError::NotAnImage`] when the declared media type is
    /// not in the image category.
    pub fn acquire(&mut self, file: IncomingFile) -> Result<&Selection, AcquireError> {
        if !file.is_image() {
            tracing::warn!(
                file = %file.name,
                media_type = %file.media_type,
                "rejected non-image file"
            );
            return Err(AcquireError::NotAnImage {
                media_type: file.media_type,
            });
        }

        tracing::debug!(file = %file.name, bytes = file.bytes.len(), "selection replaced");
        if self.phase == Phase::Idle {
            self.phase = Phase::Ready;
        }
        Ok(self.selection.insert(Selection::from(file)))
    }

    /// Cosmetic drag-over affordance.
    pub fn set_drag_over(&mut self, hovering: bool) {
        self.drag_over = hovering;
    }

    pub fn toggle_resolution(&mut self, index: usize, checked: bool) {
        self.options.set_checked(index, checked);
    }

    /// Handles the generate action.
    ///
    /// Reads the checked resolutions, validates, and on success enters
    /// `Submitting`: action disabled and busy, progress shown, previous
    /// results hidden and cleared.
    ///
    /// # Errors
    ///
    /// [`SubmitError::ActionDisabled`] while a request is in flight, or
    /// [`SubmitError::Invalid`] when a precondition fails. Neither changes
    /// any state.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitError> {
        if !self.action.is_enabled() {
            return Err(SubmitError::ActionDisabled);
        }

        let choices = self.options.choices();
        let selection = validation::validate(self.selection.as_ref(), &choices)?;
        let request = GenerationRequest::new(
            selection.name(),
            selection.media_type(),
            selection.bytes().to_vec(),
            choices.into_vec(),
        );

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);

        self.phase = Phase::Submitting;
        self.action = ActionControl::busy();
        self.progress_visible = true;
        self.gallery.clear();
        self.results_ticket = None;
        self.in_flight = Some(ticket);

        Ok(Submission { ticket, request })
    }

    /// Applies the outcome of the request issued for `ticket`.
    ///
    /// Whatever happens, including a panic while rendering, the action is
    /// re-enabled with its regular label and the progress indicator hidden
    /// before this returns.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: GenerateResult<Vec<GeneratedImage>>,
    ) -> Settlement {
        self.settle_with(ticket, outcome, Gallery::render)
    }

    fn settle_with<F>(
        &mut self,
        ticket: Ticket,
        outcome: GenerateResult<Vec<GeneratedImage>>,
        render: F,
    ) -> Settlement
    where
        F: FnOnce(&mut Gallery, Vec<GeneratedImage>),
    {
        if self.in_flight != Some(ticket) {
            tracing::warn!(ticket = ticket.value(), "ignoring response for a stale submission");
            return Settlement::Stale;
        }

        let mut guard = InteractiveRestore(self);
        match outcome {
            Ok(images) => {
                let count = images.len();
                guard.phase = Phase::SettledSuccess;
                guard.results_ticket = Some(ticket);
                render(&mut guard.gallery, images);
                Settlement::Rendered { count }
            }
            Err(err) => {
                tracing::error!(ticket = ticket.value(), error = %err, "generation request failed");
                guard.phase = Phase::SettledError;
                Settlement::Failed
            }
        }
    }

    fn restore_interactive(&mut self) {
        self.action = ActionControl::interactive();
        self.progress_visible = false;
        self.in_flight = None;
        self.phase = if self.selection.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        };
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &ResolutionOptions {
        &self.options
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn action(&self) -> ActionControl {
        self.action
    }

    #[must_use]
    pub fn is_progress_visible(&self) -> bool {
        self.progress_visible
    }

    #[must_use]
    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery {
        &mut self.gallery
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
    }

    /// Ticket of the submission whose results the gallery currently shows.
    #[must_use]
    pub fn results_ticket(&self) -> Option<Ticket> {
        self.results_ticket
    }

    /// Returns the i18n key of the drop zone status hint.
    #[must_use]
    pub fn status_key(&self) -> &'static str {
        if self.selection.is_some() {
            "drop-zone-ready"
        } else {
            "drop-zone-hint"
        }
    }
}

/// Runs [`Controller::restore_interactive`] when dropped, on every exit path.
struct InteractiveRestore<'a>(&'a mut Controller);

impl Deref for InteractiveRestore<'_> {
    type Target = Controller;

    fn deref(&self) -> &Controller {
        self.0
    }
}

impl DerefMut for InteractiveRestore<'_> {
    fn deref_mut(&mut self) -> &mut Controller {
        self.0
    }
}

impl Drop for InteractiveRestore<'_> {
    fn drop(&mut self) {
        self.0.restore_interactive();
    }
}
