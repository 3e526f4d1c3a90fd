// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: window file drops and keyboard navigation.

use super::Message;
use iced::{event, keyboard, window, Subscription};

/// Routes native events into application messages.
///
/// A file dropped anywhere on the window submits it as a new document.
/// Left/Right arrows step through pages; keys already captured by a focused
/// widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => match status {
            event::Status::Ignored => match named {
                keyboard::key::Named::ArrowLeft => Some(Message::NavigatePrevious),
                keyboard::key::Named::ArrowRight => Some(Message::NavigateNext),
                _ => None,
            },
            event::Status::Captured => None,
        },
        _ => None,
    })
}
