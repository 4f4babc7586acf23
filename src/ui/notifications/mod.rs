// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report the outcome of toolbar actions without blocking the
//! planner. Failed collaborator calls always end up here as error toasts,
//! which stay until dismissed; success and info toasts vanish after 3s,
//! warnings after 5s.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-plan-imported"));
//! let overlay = toast::overlay(&manager, &i18n).map(|e| e.map(Message::Notification));
//! ```

mod manager;
mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, NotificationId, MAX_VISIBLE};
pub use notification::{Notification, Severity, ACTION_FAILED_KEY};
