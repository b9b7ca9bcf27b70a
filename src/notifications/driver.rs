// SPDX-License-Identifier: MPL-2.0
//! Async adapter for event loops running on tokio.
//!
//! An iced application maps each wakeup to a task:
//!
//! ```ignore
//! Task::batch(
//!     manager
//!         .take_wakeups()
//!         .into_iter()
//!         .map(|wakeup| Task::perform(driver::deliver(wakeup), AppMessage::Notification)),
//! )
//! ```

use super::manager::{Message, Wakeup};

/// Resolves to the wakeup's message once its delay has elapsed.
pub async fn deliver(wakeup: Wakeup) -> Message {
    tokio::time::sleep(wakeup.after).await;
    wakeup.message
}

/// Resolves to every message in `wakeups`, in the order they fall due.
pub async fn deliver_all(mut wakeups: Vec<Wakeup>) -> Vec<Message> {
    wakeups.sort_by_key(|wakeup| wakeup.after);
    let start = tokio::time::Instant::now();
    let mut messages = Vec::with_capacity(wakeups.len());
    for wakeup in wakeups {
        tokio::time::sleep_until(start + wakeup.after).await;
        messages.push(wakeup.message);
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::manager::Manager;
    use crate::notifications::surface::HeadlessSurface;
    use crate::notifications::{Notification, State};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn deliver_waits_for_the_delay() {
        let mut manager = Manager::new(HeadlessSurface::default());
        manager.show(Notification::new("Async").with_duration_secs(2.0));
        let wakeup = manager.take_wakeups().remove(0);

        let start = tokio::time::Instant::now();
        let message = deliver(wakeup).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(message, wakeup.message);

        manager.update(message);
        assert_eq!(manager.state(), State::Dismissing);
    }

    #[tokio::test(start_paused = true)]
    async fn full_lifecycle_through_tokio_timers() {
        let mut manager = Manager::new(HeadlessSurface::default());
        manager.show(Notification::new("Loop").with_duration_secs(1.0));

        let mut wakeups = manager.take_wakeups();
        while !wakeups.is_empty() {
            for message in deliver_all(wakeups).await {
                manager.update(message);
            }
            wakeups = manager.take_wakeups();
        }
        assert_eq!(manager.state(), State::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn deliver_all_orders_by_delay() {
        let mut first = Manager::new(HeadlessSurface::default());
        first.show(Notification::new("Late").with_duration_secs(5.0));
        let mut second = Manager::new(HeadlessSurface::default());
        second.show(Notification::new("Early").with_duration_secs(1.0));

        let late = first.take_wakeups().remove(0);
        let early = second.take_wakeups().remove(0);
        let messages = deliver_all(vec![late, early]).await;
        assert_eq!(messages, vec![early.message, late.message]);
    }
}
