// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Tick period; short enough for a smooth spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes window file-drag events and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Ticks only while something time-based is pending.
pub fn create_tick_subscription(
    is_loading: bool,
    has_pending_drops: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading || has_pending_drops || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
