// SPDX-License-Identifier: MPL-2.0
//! Queue of toasts currently shown or waiting for a free slot.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts shown at once; the rest wait in order.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Notification>,
    waiting: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a toast, or queues it while all slots are taken.
    ///
    /// Pushing a message that is already up restarts its lifetime instead of
    /// stacking a copy, so repeated clicks on an invalid generate action
    /// produce one toast.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.message_key(), "warning toast"),
            Severity::Error => tracing::error!(key = notification.message_key(), "error toast"),
            Severity::Success => tracing::debug!(key = notification.message_key(), "success toast"),
        }

        if let Some(existing) = self
            .shown
            .iter_mut()
            .find(|shown| shown.same_message(&notification))
        {
            existing.restart(Instant::now());
            return;
        }
        if self
            .waiting
            .iter()
            .any(|waiting| waiting.same_message(&notification))
        {
            return;
        }

        if self.shown.len() < MAX_VISIBLE {
            self.shown.push_front(notification);
        } else {
            self.waiting.push_back(notification);
        }
    }

    /// Removes one toast. Returns whether it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(index) = self.shown.iter().position(|n| n.id() == id) {
            self.shown.remove(index);
            self.fill_free_slots();
            return true;
        }
        if let Some(index) = self.waiting.iter().position(|n| n.id() == id) {
            self.waiting.remove(index);
            return true;
        }
        false
    }

    /// Removes every toast, shown or waiting, carrying `message_key`.
    pub fn dismiss_key(&mut self, message_key: &str) {
        self.shown.retain(|n| n.message_key() != message_key);
        self.waiting.retain(|n| n.message_key() != message_key);
        self.fill_free_slots();
    }

    /// Drops expired toasts. Called from the periodic tick.
    pub fn tick(&mut self) {
        self.expire(Instant::now());
    }

    fn expire(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|n| !n.is_expired(now));
        if self.shown.len() != before {
            self.fill_free_slots();
        }
    }

    fn fill_free_slots(&mut self) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(mut next) = self.waiting.pop_front() else {
                break;
            };
            // Waiting time does not count against the lifetime
            next.restart(Instant::now());
            self.shown.push_back(next);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }
}
