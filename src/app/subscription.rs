// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::{Message, Screen};
use crate::config::NOTIFICATION_TICK_MS;
use crate::rotation::RotationTimer;
use iced::{time, Subscription};
use std::time::Duration;

/// The fact rotation only runs while the home page is on screen.
///
/// Returning `Subscription::none()` makes Iced drop both timers, which is
/// how teardown cancels them.
pub fn create_rotation_subscription(
    screen: Screen,
    rotation: &RotationTimer,
) -> Subscription<Message> {
    if screen == Screen::Home {
        rotation.subscription().map(Message::Rotation)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rotation::FactInterval;
    use iced::advanced::subscription::into_recipes;
    use std::num::NonZeroUsize;

    fn active_timer() -> RotationTimer {
        let mut timer = RotationTimer::new(NonZeroUsize::MIN, FactInterval::default());
        timer.activate();
        timer
    }

    #[test]
    fn rotation_runs_on_home_screen() {
        let timer = active_timer();
        let subscription = create_rotation_subscription(Screen::Home, &timer);
        assert_eq!(into_recipes(subscription).len(), 2);
    }

    #[test]
    fn settings_screen_cancels_rotation_timers() {
        let timer = active_timer();
        let subscription = create_rotation_subscription(Screen::Settings, &timer);
        assert_eq!(into_recipes(subscription).len(), 0);
    }

    #[test]
    fn torn_down_rotation_has_no_timers_even_on_home() {
        let mut timer = active_timer();
        timer.teardown();
        let subscription = create_rotation_subscription(Screen::Home, &timer);
        assert_eq!(into_recipes(subscription).len(), 0);
    }

    #[test]
    fn tick_only_runs_while_notifications_exist() {
        assert_eq!(into_recipes(create_tick_subscription(false)).len(), 0);
        assert_eq!(into_recipes(create_tick_subscription(true)).len(), 1);
    }
}
