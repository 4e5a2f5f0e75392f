// SPDX-License-Identifier: MPL-2.0
//! Global keyboard shortcut for dismissing the newest toast.

use super::provider::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::Event;

/// Maps a native event to a notification message.
///
/// Only an Escape key press is of interest; it dismisses the newest toast
/// whatever widget currently has focus.
#[must_use]
pub fn message_for(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) if is_dismiss_key(key) => {
            Some(Message::DismissLatest)
        }
        _ => None,
    }
}

fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Escape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::mouse;

    #[test]
    fn escape_is_the_dismiss_key() {
        assert!(is_dismiss_key(&Key::Named(Named::Escape)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(!is_dismiss_key(&Key::Named(Named::Enter)));
        assert!(!is_dismiss_key(&Key::Character("q".into())));
    }

    fn key_pressed(key: Key, modifiers: keyboard::Modifiers) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
            location: keyboard::Location::Standard,
            modifiers,
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_press_dismisses_the_latest() {
        let event = key_pressed(Key::Named(Named::Escape), keyboard::Modifiers::default());
        assert_eq!(message_for(&event), Some(Message::DismissLatest));
    }

    #[test]
    fn escape_with_modifiers_still_dismisses() {
        let event = key_pressed(Key::Named(Named::Escape), keyboard::Modifiers::SHIFT);
        assert_eq!(message_for(&event), Some(Message::DismissLatest));
    }

    #[test]
    fn other_key_presses_map_to_nothing() {
        let event = key_pressed(Key::Named(Named::Enter), keyboard::Modifiers::default());
        assert_eq!(message_for(&event), None);
    }

    #[test]
    fn escape_release_is_ignored() {
        let event = Event::Keyboard(keyboard::Event::KeyReleased {
            key: Key::Named(Named::Escape),
            modified_key: Key::Named(Named::Escape),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
        });
        assert_eq!(message_for(&event), None);
    }

    #[test]
    fn non_keyboard_events_are_ignored() {
        assert_eq!(message_for(&Event::Mouse(mouse::Event::CursorLeft)), None);
    }
}
