// SPDX-License-Identifier: MPL-2.0
//! Notification queue and lifecycle.
//!
//! At most [`MAX_VISIBLE`] toasts show at once; the rest wait in FIFO order.
//! Display time is measured from the moment a toast becomes visible, not
//! from when it was pushed.

use super::notification::Notification;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Handle returned by [`Manager::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic auto-dismiss check.
    Tick(Instant),
}

#[derive(Debug)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Entry>,
    queue: VecDeque<(NotificationId, Notification)>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when the overlay is full.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(Entry {
                id,
                notification,
                shown_at: Instant::now(),
            });
        } else {
            self.queue.push_back((id, notification));
        }
        id
    }

    /// Returns `true` if a notification with `id` was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|entry| entry.id == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|(queued, _)| *queued == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops every visible toast whose display time has run out at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|entry| {
            entry
                .notification
                .dismiss_after()
                .is_none_or(|duration| now.saturating_duration_since(entry.shown_at) < duration)
        });

        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.visible
            .iter()
            .map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some((id, notification)) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(Entry {
                id,
                notification,
                shown_at: now,
            });
        }
    }
}
