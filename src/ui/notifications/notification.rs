// SPDX-License-Identifier: MPL-2.0
//! Notification data: severity, i18n message key and lifetime.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is stored as an i18n key and resolved at render time, so a
/// language switch also retranslates visible toasts.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the auto-dismiss delay has elapsed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|d| now.saturating_duration_since(self.created_at) >= d)
    }
}
