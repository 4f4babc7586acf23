// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use crate::config::NOTIFICATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while toasts are on screen or queued, so an idle planner
/// does not wake up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
