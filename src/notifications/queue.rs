// SPDX-License-Identifier: MPL-2.0
//! FIFO sequencing of notifications through one manager.
//!
//! [`NotificationQueue`] buffers requests and hands them to its [`Manager`]
//! one at a time. Each dispatched request has its tap and timeout callbacks
//! wrapped so that, after the caller's callback runs, the queue is told to
//! dispatch the next one. No polling is involved.
//!
//! Once anything has been queued, the manager should only be driven through
//! the queue. A banner shown directly on the manager still holds back every
//! queued request until it has left the screen.
//!
//! Besides the tap/timeout continuation, every [`NotificationQueue::update`]
//! and [`NotificationQueue::process_pending`] ends by dispatching the head of
//! the buffer if the manager has gone idle, so a request enqueued during a
//! slide-out or after a manual dismiss is never stranded.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::manager::{Manager, Message, Wakeup};
use super::notification::Notification;
use super::surface::Surface;
use super::timeline::EventTarget;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};

type Pending = Arc<Mutex<VecDeque<Notification>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    /// A handle pushed a request.
    Enqueued,
    /// A dispatched request reached its tap or timeout.
    Advance,
}

/// Locks the pending buffer, recovering it if a holder panicked.
fn lock(pending: &Pending) -> MutexGuard<'_, VecDeque<Notification>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Thread-safe producer side of a [`NotificationQueue`].
#[derive(Clone, Debug)]
pub struct QueueHandle {
    pending: Pending,
    signals: Sender<Signal>,
}

impl QueueHandle {
    /// Appends `notification` to the queue.
    ///
    /// The request is dispatched on the owning thread's next
    /// [`NotificationQueue::process_pending`] if the manager is idle by then.
    /// Returns `false` if the queue has been dropped.
    pub fn enqueue(&self, notification: Notification) -> bool {
        lock(&self.pending).push_back(notification);
        self.signals.send(Signal::Enqueued).is_ok()
    }
}

/// A manager plus its FIFO of not-yet-dispatched requests.
pub struct NotificationQueue<S> {
    manager: Manager<S>,
    pending: Pending,
    signals_tx: Sender<Signal>,
    signals_rx: Receiver<Signal>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface> NotificationQueue<S> {
    #[must_use]
    pub fn new(manager: Manager<S>) -> Self {
        let (signals_tx, signals_rx) = unbounded();
        Self {
            manager,
            pending: Arc::new(Mutex::new(VecDeque::new())),
            signals_tx,
            signals_rx,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for both the queue and its manager.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.manager.set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn handle(&self) -> QueueHandle {
        QueueHandle {
            pending: Arc::clone(&self.pending),
            signals: self.signals_tx.clone(),
        }
    }

    #[must_use]
    pub fn manager(&self) -> &Manager<S> {
        &self.manager
    }

    /// Direct access to the manager. Showing through it bypasses the queue.
    pub fn manager_mut(&mut self) -> &mut Manager<S> {
        &mut self.manager
    }

    /// Requests waiting to be dispatched.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        lock(&self.pending).len()
    }

    /// Appends `notification`, dispatching it right away if the manager is idle.
    pub fn enqueue(&mut self, notification: Notification) {
        let pending = {
            let mut queue = lock(&self.pending);
            queue.push_back(notification);
            queue.len()
        };
        self.log(DiagnosticEventKind::Enqueued { pending });
        self.resume();
    }

    /// Drops every request not yet dispatched and returns how many there were.
    pub fn clear_pending(&mut self) -> usize {
        let dropped = {
            let mut queue = lock(&self.pending);
            let dropped = queue.len();
            queue.clear();
            dropped
        };
        self.log(DiagnosticEventKind::Cleared { dropped });
        dropped
    }

    /// Forwards `message` to the manager, then dispatches whatever it unblocked.
    pub fn update(&mut self, message: Message) {
        self.manager.update(message);
        self.drain_signals();
        self.resume();
    }

    /// Applies cross-thread requests for both the manager and the queue.
    pub fn process_pending(&mut self) {
        self.manager.process_pending();
        self.drain_signals();
        self.resume();
    }

    pub fn take_wakeups(&mut self) -> Vec<Wakeup> {
        self.manager.take_wakeups()
    }

    fn drain_signals(&mut self) {
        while let Ok(signal) = self.signals_rx.try_recv() {
            match signal {
                Signal::Advance => self.advance(),
                Signal::Enqueued => {
                    self.log(DiagnosticEventKind::Enqueued {
                        pending: self.pending_len(),
                    });
                    self.resume();
                }
            }
        }
    }

    /// Dispatches the head if the manager's slot has been freed.
    fn resume(&mut self) {
        if !self.manager.is_notification_active() {
            self.advance();
        }
    }

    /// Pops the head and shows it with advancing callbacks. No-op when empty.
    fn advance(&mut self) {
        let (next, remaining) = {
            let mut queue = lock(&self.pending);
            (queue.pop_front(), queue.len())
        };
        let Some(mut notification) = next else {
            return;
        };

        let signals = self.signals_tx.clone();
        notification.wrap_callbacks(|original| {
            let signals = signals.clone();
            Box::new(move || {
                if let Some(callback) = original {
                    callback();
                }
                let _ = signals.send(Signal::Advance);
            })
        });

        self.log(DiagnosticEventKind::Dispatched { remaining });
        self.manager.show(notification);
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<S: Surface> EventTarget for NotificationQueue<S> {
    fn update(&mut self, message: Message) {
        NotificationQueue::update(self, message);
    }

    fn take_wakeups(&mut self) -> Vec<Wakeup> {
        NotificationQueue::take_wakeups(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::notifications::manager::State;
    use crate::notifications::surface::HeadlessSurface;
    use crate::notifications::timeline::Timeline;
    use std::time::Duration;

    type Log = Arc<Mutex<Vec<String>>>;

    fn queue() -> NotificationQueue<HeadlessSurface> {
        NotificationQueue::new(Manager::new(HeadlessSurface::default()))
    }

    fn traced(title: &str, log: &Log) -> Notification {
        let tag = title.to_string();
        let log = Arc::clone(log);
        Notification::new(title).on_timeout(move || {
            log.lock().expect("lock").push(tag);
        })
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().expect("lock").clone()
    }

    #[test]
    fn enqueue_while_idle_dispatches_immediately() {
        let mut queue = queue();
        queue.enqueue(Notification::new("A"));
        assert_eq!(queue.manager().state(), State::Displayed);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn requests_are_shown_one_at_a_time_in_order() {
        let log = Log::default();
        let mut queue = queue();
        let mut timeline = Timeline::new();

        queue.enqueue(traced("A", &log));
        queue.enqueue(traced("B", &log));
        queue.enqueue(traced("C", &log));
        assert_eq!(queue.pending_len(), 2);

        // A times out at 3s; B is shown after A's slide-out
        timeline.advance(Duration::from_secs(3), &mut queue);
        assert_eq!(entries(&log), ["A"]);
        assert_eq!(queue.pending_len(), 1);
        assert_eq!(queue.manager().state(), State::Dismissing);

        timeline.advance(Duration::from_millis(300), &mut queue);
        assert_eq!(queue.manager().state(), State::Displayed);
        assert_eq!(queue.manager().surface().live_count(), 1);

        timeline.advance(Duration::from_secs(10), &mut queue);
        assert_eq!(entries(&log), ["A", "B", "C"]);
        assert_eq!(queue.manager().state(), State::Idle);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn tap_advances_to_next_request() {
        let log = Log::default();
        let tapped = Arc::clone(&log);
        let mut queue = queue();
        let mut timeline = Timeline::new();

        queue.enqueue(Notification::new("A").endless().on_tap(move || {
            tapped.lock().expect("lock").push("tap A".into());
        }));
        queue.enqueue(traced("B", &log));
        timeline.sync(&mut queue);

        let a = queue.manager().active_notification().expect("A active");
        queue.update(Message::Tapped(a));
        assert_eq!(queue.pending_len(), 0);
        assert_eq!(queue.manager().deferred_count(), 1);

        timeline.advance(Duration::from_millis(300), &mut queue);
        let b = queue.manager().active_notification().expect("B active");
        assert_ne!(a, b);

        timeline.advance(Duration::from_secs(4), &mut queue);
        assert_eq!(entries(&log), ["tap A", "B"]);
    }

    #[test]
    fn request_behind_direct_show_waits_until_it_leaves() {
        let log = Log::default();
        let mut queue = queue();
        let mut timeline = Timeline::new();

        queue.manager_mut().show(Notification::new("D"));
        queue.enqueue(traced("A", &log));
        assert_eq!(queue.pending_len(), 1);

        // D times out but is still sliding out
        timeline.advance(Duration::from_secs(3), &mut queue);
        assert_eq!(queue.manager().state(), State::Dismissing);
        assert_eq!(queue.pending_len(), 1);

        timeline.advance(Duration::from_millis(300), &mut queue);
        assert_eq!(queue.pending_len(), 0);
        assert_eq!(queue.manager().state(), State::Displayed);

        timeline.advance(Duration::from_secs(20), &mut queue);
        assert_eq!(entries(&log), ["A"]);
        assert_eq!(queue.manager().state(), State::Idle);
    }

    #[test]
    fn enqueue_during_slide_out_is_dispatched_after_removal() {
        let log = Log::default();
        let mut queue = queue();
        let mut timeline = Timeline::new();

        queue.enqueue(traced("A", &log).with_duration_secs(1.0));
        timeline.advance(Duration::from_millis(1000), &mut queue);
        assert_eq!(queue.manager().state(), State::Dismissing);

        queue.enqueue(traced("B", &log));
        assert_eq!(queue.pending_len(), 1);

        timeline.advance(Duration::from_secs(60), &mut queue);
        assert_eq!(queue.pending_len(), 0);
        assert_eq!(entries(&log), ["A", "B"]);
        assert_eq!(queue.manager().state(), State::Idle);
    }

    #[test]
    fn manual_dismiss_of_queued_banner_resumes_queue() {
        let mut queue = queue();
        let mut timeline = Timeline::new();

        queue.enqueue(Notification::new("A").endless());
        queue.enqueue(Notification::new("B").endless());
        let a = queue.manager().active_notification().expect("A active");

        assert!(queue.manager_mut().dismiss(a, None));
        timeline.advance(Duration::from_millis(300), &mut queue);

        let b = queue.manager().active_notification().expect("B active");
        assert_ne!(a, b);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn clear_pending_drops_buffered_requests() {
        let mut queue = queue();
        queue.enqueue(Notification::new("A"));
        queue.enqueue(Notification::new("B"));
        queue.enqueue(Notification::new("C"));

        assert_eq!(queue.clear_pending(), 2);
        assert_eq!(queue.pending_len(), 0);
        // the dispatched one is unaffected
        assert_eq!(queue.manager().state(), State::Displayed);
    }

    #[test]
    fn advance_on_empty_queue_is_a_noop() {
        let mut queue = queue();
        queue.advance();
        assert_eq!(queue.manager().state(), State::Idle);
    }

    #[test]
    fn handle_enqueues_from_other_threads() {
        let mut queue = queue();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let handle = queue.handle();
                std::thread::spawn(move || handle.enqueue(Notification::new(format!("T{i}"))))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("producer panicked"));
        }

        assert_eq!(queue.pending_len(), 4);
        queue.process_pending();
        assert_eq!(queue.manager().state(), State::Displayed);
        assert_eq!(queue.pending_len(), 3);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let mut queue = queue();
        let pending = Arc::clone(&queue.pending);
        let _ = std::thread::spawn(move || {
            let _guard = pending.lock().expect("lock");
            panic!("poison the pending buffer");
        })
        .join();

        queue.enqueue(Notification::new("Still works"));
        assert_eq!(queue.manager().state(), State::Displayed);
    }

    #[test]
    fn dispatch_is_logged() {
        let mut collector = DiagnosticsCollector::default();
        let mut queue = queue();
        queue.set_diagnostics(collector.handle());

        queue.enqueue(Notification::new("A"));
        queue.enqueue(Notification::new("B"));
        queue.clear_pending();

        collector.process_pending();
        let kinds: Vec<_> = collector
            .events()
            .map(|e| e.kind.clone())
            .filter(|kind| {
                matches!(
                    kind,
                    DiagnosticEventKind::Enqueued { .. }
                        | DiagnosticEventKind::Dispatched { .. }
                        | DiagnosticEventKind::Cleared { .. }
                )
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Enqueued { pending: 1 },
                DiagnosticEventKind::Dispatched { remaining: 0 },
                DiagnosticEventKind::Enqueued { pending: 1 },
                DiagnosticEventKind::Cleared { dropped: 1 },
            ]
        );
    }
}
