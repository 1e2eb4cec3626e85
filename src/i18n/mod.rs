// SPDX-License-Identifier: MPL-2.0
//! Localized UI text.
//!
//! Fluent files under `assets/i18n/` are embedded at build time. Every string
//! the window shows, toasts included, is looked up by message id through
//! [`I18n`], with `{ $name }` arguments for file names and URLs.

pub mod fluent;

pub use fluent::I18n;
