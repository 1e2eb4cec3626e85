// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes borrowed state and returns an element emitting its own small
//! message type, which `crate::app` maps into the application message.
//!
//! # Screen parts
//!
//! - [`drop_zone`] - Drop target and browse button
//! - [`resolution_picker`] - Resolution checkboxes
//! - [`gallery`] - Results region with previews and downloads
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod drop_zone;
pub mod gallery;
pub mod notifications;
pub mod resolution_picker;
pub mod styles;
pub mod theming;
pub mod widgets;
