// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in a queue and are
//! promoted as visible ones expire or are dismissed.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors pushed warnings and errors into the diagnostics channel.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(notification.message_key()),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops visible notifications whose auto-dismiss delay elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired_at(now));
        if self.visible.len() < before {
            self.promote_from_queue();
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

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
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

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued_and_promoted_on_dismiss() {
        let mut manager = Manager::new();
        let first = Notification::error("e1");
        let first_id = first.id();
        manager.push(first);
        for key in ["e2", "e3", "e4"] {
            manager.push(Notification::error(key));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "e4"));
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let orphan = Notification::info("x");
        assert!(!manager.dismiss(orphan.id()));
    }

    #[test]
    fn tick_expires_only_timed_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("done"));
        manager.push(Notification::error("broken"));

        manager.handle_message(&Message::Tick(Instant::now() + Duration::from_secs(10)));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["broken"]);
    }

    #[test]
    fn warnings_and_errors_are_mirrored_to_diagnostics() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(Notification::success("notification-batch-success"));
        manager.push(Notification::warning("notification-config-load-error"));
        manager.push(Notification::error("notification-client-init-error"));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Warning {
                    message: "notification-config-load-error".to_string()
                },
                DiagnosticEventKind::Error {
                    message: "notification-client-init-error".to_string()
                },
            ]
        );
    }
}
