// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval between toast expiry checks when nothing is animating.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Routes window resizes to the layout logic.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick for card animations and notification auto-dismiss.
///
/// Animations need frame-rate ticks; toasts only need a coarse one. Nothing
/// ticks when the screen is idle.
pub fn create_tick_subscription(animating: bool, has_notifications: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(motion::TICK_MS)).map(Message::Tick)
    } else if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
