// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the notification provider: the global Escape shortcut and
//! a periodic tick that only runs while some countdown is pending.

use super::Message;
use crate::ui::notifications::{keyboard, NotificationMessage};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for Escape anywhere in the window, focused widget or not.
pub fn create_escape_subscription(enabled: bool) -> Subscription<Message> {
    if enabled {
        event::listen_with(|event, _status, _window_id| {
            keyboard::message_for(&event).map(Message::Notification)
        })
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_countdowns: bool, interval: Duration) -> Subscription<Message> {
    if has_countdowns {
        time::every(interval).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_listener_follows_the_setting() {
        assert_eq!(create_escape_subscription(true).units(), 1);
        assert_eq!(create_escape_subscription(false).units(), 0);
    }

    #[test]
    fn tick_runs_only_while_countdowns_exist() {
        let interval = Duration::from_millis(100);
        assert_eq!(create_tick_subscription(true, interval).units(), 1);
        assert_eq!(create_tick_subscription(false, interval).units(), 0);
    }
}
