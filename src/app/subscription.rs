// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Drag-and-drop is delivered by the window rather than by a widget, so the
//! hover and drop events are routed here regardless of where the cursor is.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the periodic tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window file drag-and-drop events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::FilesHoveredLeft)
        }
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss and
/// the progress spinner animation.
pub fn create_tick_subscription(
    progress_visible: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if progress_visible || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
