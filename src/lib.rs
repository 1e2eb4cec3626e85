// SPDX-License-Identifier: MPL-2.0
//! `wallgen_client` is a desktop client for a wallpaper generation service,
//! built with the Iced GUI framework.
//!
//! The user stages one image, picks target resolutions, and submits both to
//! the service in a single multipart request. The returned variants are shown
//! in a gallery with a preview and a download action each.
//!
//! - [`workflow`] holds the selection, the validation rules, and the phase
//!   machine, free of any widget code.
//! - [`generation`] talks HTTP to the service.
//! - [`app`] and [`ui`] render the single window and route events.

#![doc(html_root_url = "https://docs.rs/wallgen_client/0.1.0")]

pub mod app;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod ui;
pub mod workflow;
