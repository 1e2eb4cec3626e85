// SPDX-License-Identifier: MPL-2.0
//! Interaction state machine for the generation workflow.
//!
//! Everything in this module is free of widgets and I/O so the workflow can
//! be driven headless in tests. The iced layer (`crate::app`) translates
//! window events and task results into calls on [`Controller`] and renders
//! whatever state it exposes.
//!
//! # Components
//!
//! - [`selection`] - the single staged image and the image-type gate
//! - [`options`] - resolution checkboxes and the choice set read at submit time
//! - [`validation`] - submit-time preconditions
//! - [`phase`] - the UI phase and the action control
//! - [`gallery`] - rendered results
//! - [`controller`] - transitions tying the above together

pub mod controller;
pub mod gallery;
pub mod options;
pub mod phase;
pub mod selection;
pub mod validation;

pub use controller::{AcquireError, Controller, Settlement, SubmitError, Submission, Ticket};
pub use gallery::{Gallery, GalleryEntry};
pub use options::{ResolutionChoices, ResolutionOption, ResolutionOptions};
pub use phase::{ActionControl, Phase};
pub use selection::{IncomingFile, Selection, PICKER_EXTENSIONS};
pub use validation::ValidationError;
