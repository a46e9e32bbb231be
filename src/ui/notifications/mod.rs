// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking feedback.
//!
//! - [`notification`] - `Notification` and `Severity`
//! - [`manager`] - queuing and auto-dismiss
//! - [`toast`] - rendering
//!
//! Durations: 3s for success/info, 5s for warnings, manual dismiss for errors.
//! Toasts stack in the bottom-right corner.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
