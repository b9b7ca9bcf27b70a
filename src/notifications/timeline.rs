// SPDX-License-Identifier: MPL-2.0
//! Deterministic wakeup scheduler.
//!
//! [`Timeline`] plays the part of the event loop for headless embeddings and
//! tests: it collects the wakeups a target requests, keeps a virtual clock,
//! and delivers due messages in deadline order when advanced.

use std::collections::BTreeMap;
use std::time::Duration;

use super::manager::{Manager, Message, Wakeup};
use super::surface::Surface;

/// Anything that consumes [`Message`]s and asks for [`Wakeup`]s.
pub trait EventTarget {
    fn update(&mut self, message: Message);
    fn take_wakeups(&mut self) -> Vec<Wakeup>;
}

impl<S: Surface> EventTarget for Manager<S> {
    fn update(&mut self, message: Message) {
        Manager::update(self, message);
    }

    fn take_wakeups(&mut self) -> Vec<Wakeup> {
        Manager::take_wakeups(self)
    }
}

/// Virtual clock plus pending wakeups.
#[derive(Debug, Default)]
pub struct Timeline {
    elapsed: Duration,
    seq: u64,
    /// Keyed by `(deadline, seq)` so equal deadlines keep request order.
    scheduled: BTreeMap<(Duration, u64), Message>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time advanced so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of wakeups scheduled and not yet delivered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }

    /// Schedules every wakeup `target` has requested, relative to now.
    pub fn sync(&mut self, target: &mut impl EventTarget) {
        for wakeup in target.take_wakeups() {
            let deadline = self.elapsed.saturating_add(wakeup.after);
            self.scheduled.insert((deadline, self.seq), wakeup.message);
            self.seq += 1;
        }
    }

    /// Moves the clock forward by `by`, delivering every message due on the
    /// way, including ones scheduled by earlier deliveries.
    ///
    /// Returns the number of messages delivered.
    pub fn advance(&mut self, by: Duration, target: &mut impl EventTarget) -> usize {
        let end = self.elapsed.saturating_add(by);
        let mut delivered = 0;

        loop {
            self.sync(target);
            let Some(entry) = self.scheduled.first_entry() else {
                break;
            };
            let (deadline, _) = *entry.key();
            if deadline > end {
                break;
            }
            let message = entry.remove();
            self.elapsed = deadline;
            target.update(message);
            delivered += 1;
        }

        self.elapsed = end;
        self.sync(target);
        delivered
    }
}
