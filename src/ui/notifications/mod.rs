// SPDX-License-Identifier: MPL-2.0
//! Toasts for user feedback.
//!
//! Rejected files, missing selections, failed generations and downloads all
//! surface here, in the bottom-right corner, without blocking the page.
//! Success toasts fade after about 3s and warnings after about 5s. Errors
//! stay until dismissed. At most three are shown; the rest wait their turn.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::overlay;
