// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Manager`] owns at most one presentation at a time and walks it
//! through `Idle -> Showing -> Displayed -> Dismissing -> Idle`. It never
//! sleeps or spawns: every delay (display timer, slide-out) is handed to the
//! embedding event loop as a [`Wakeup`], whose message comes back through
//! [`Manager::update`].
//!
//! A `show` issued while the slot is busy is deferred, never dropped and never
//! overlapped: the active banner starts sliding out and deferred requests are
//! presented in the order they were issued once the slot is free again.

use std::collections::VecDeque;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use super::notification::{Callback, Notification};
use super::presentation::{Phase, Presentation, PresentationId};
use super::style::Style;
use super::surface::{Animation, Surface};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissReason};

/// Continuation run once a dismissed banner has left the screen.
pub type Completion = Callback;

/// Events delivered back to the manager by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The display timer of a presentation elapsed.
    Expired(PresentationId),
    /// The slide-out of a presentation has finished; tear it down.
    DismissFinished(PresentationId),
    /// The surface reported a completed tap on a presentation.
    Tapped(PresentationId),
}

/// Request to deliver `message` once `after` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub after: Duration,
    pub message: Message,
}

/// Observable lifecycle state of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing in the slot.
    Idle,
    /// A banner is being built and attached.
    ///
    /// Transient: `show` builds, attaches and starts the slide-in before it
    /// returns, so callers see `Displayed` next. Kept so the lifecycle reads
    /// `Idle -> Showing -> Displayed -> Dismissing` in full.
    Showing,
    /// A banner is on screen, its timer armed unless endless.
    Displayed,
    /// A banner is sliding out.
    Dismissing,
}

enum Command {
    Show(Notification),
    DismissActive(Option<Completion>),
}

/// Thread-safe entry point to a [`Manager`].
///
/// Requests are marshalled onto the thread owning the manager and take
/// effect on its next [`Manager::process_pending`].
#[derive(Clone, Debug)]
pub struct ManagerHandle {
    commands: Sender<Command>,
}

impl ManagerHandle {
    /// Requests `notification` be shown.
    ///
    /// Returns `false` only if the manager has been dropped.
    pub fn show(&self, notification: Notification) -> bool {
        self.commands.send(Command::Show(notification)).is_ok()
    }

    /// Requests the active banner be dismissed.
    ///
    /// Returns `false` only if the manager has been dropped.
    pub fn dismiss_active(&self, completion: Option<Completion>) -> bool {
        self.commands
            .send(Command::DismissActive(completion))
            .is_ok()
    }
}

/// Single-slot notification state machine driving a [`Surface`].
pub struct Manager<S> {
    surface: S,
    style: Style,
    active: Option<Presentation>,
    /// Requests that arrived while the slot was busy, oldest first.
    deferred: VecDeque<Notification>,
    wakeups: Vec<Wakeup>,
    commands_tx: Sender<Command>,
    commands_rx: Receiver<Command>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface> Manager<S> {
    /// Creates an idle manager with the default style.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_style(surface, Style::default())
    }

    #[must_use]
    pub fn with_style(surface: S, style: Style) -> Self {
        let (commands_tx, commands_rx) = unbounded();
        Self {
            surface,
            style,
            active: None,
            deferred: VecDeque::new(),
            wakeups: Vec::new(),
            commands_tx,
            commands_rx,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns a handle other threads can use to reach this manager.
    #[must_use]
    pub fn handle(&self) -> ManagerHandle {
        ManagerHandle {
            commands: self.commands_tx.clone(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Styling changes apply to the next presentation only.
    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn state(&self) -> State {
        match self.active.as_ref().map(|p| p.phase) {
            None => State::Idle,
            Some(Phase::Showing) => State::Showing,
            Some(Phase::Displayed) => State::Displayed,
            Some(Phase::Dismissing) => State::Dismissing,
        }
    }

    /// Returns whether a banner occupies the slot, including one sliding out.
    #[must_use]
    pub fn is_notification_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_notification(&self) -> Option<PresentationId> {
        self.active.as_ref().map(|p| p.id)
    }

    /// Number of `show` requests waiting for the slot.
    #[must_use]
    pub fn deferred_count(&self) -> usize {
        self.deferred.len()
    }

    /// Shows `notification`, or defers it behind the active banner.
    ///
    /// A busy slot makes the active banner start sliding out; the request is
    /// presented once the slot is free and every earlier deferred request has
    /// had its turn.
    pub fn show(&mut self, notification: Notification) {
        let Some(active) = self.active.as_ref().map(|p| p.id) else {
            self.present(notification);
            return;
        };

        self.deferred.push_back(notification);
        self.log(DiagnosticEventKind::Deferred {
            pending: self.deferred.len(),
        });
        self.begin_dismiss(active, DismissReason::Replaced, None);
    }

    /// Dismisses whatever is in the slot.
    ///
    /// Returns whether a dismissal was triggered. `completion` runs after
    /// the banner has been removed; it is dropped unrun when nothing is active.
    pub fn dismiss_active(&mut self, completion: Option<Completion>) -> bool {
        match self.active_notification() {
            Some(id) => self.begin_dismiss(id, DismissReason::Manual, completion),
            None => false,
        }
    }

    /// Dismisses the presentation `id`.
    ///
    /// Returns `false` without side effects if `id` is not on screen. If it
    /// is already sliding out, `completion` joins the pending teardown and no
    /// second animation starts.
    pub fn dismiss(&mut self, id: PresentationId, completion: Option<Completion>) -> bool {
        self.begin_dismiss(id, DismissReason::Manual, completion)
    }

    /// Handles a message delivered by the event loop.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Expired(id) => self.expire(id),
            Message::DismissFinished(id) => self.finish_dismiss(id),
            Message::Tapped(id) => self.tap(id),
        }
    }

    /// Applies every request sent through a [`ManagerHandle`], in order.
    pub fn process_pending(&mut self) {
        while let Ok(command) = self.commands_rx.try_recv() {
            match command {
                Command::Show(notification) => self.show(notification),
                Command::DismissActive(completion) => {
                    self.dismiss_active(completion);
                }
            }
        }
    }

    /// Returns and clears the wakeups requested since the last call.
    pub fn take_wakeups(&mut self) -> Vec<Wakeup> {
        std::mem::take(&mut self.wakeups)
    }

    fn present(&mut self, notification: Notification) -> PresentationId {
        let id = PresentationId::new();
        let extent = self.surface.construct(id, &notification, &self.style);
        let screen = self.surface.screen_size();
        let timer = notification.display_time(self.style.default_duration);

        let mut presentation = Presentation::new(id, notification, extent, self.style.position);
        self.surface.attach(id, presentation.offscreen_center(screen));
        presentation.displayed = true;

        if let Some(sound) = self.style.sound {
            self.surface.play_sound(sound);
        }
        self.surface
            .animate(id, presentation.resting_center(screen), Animation::slide_in());
        presentation.phase = Phase::Displayed;
        self.active = Some(presentation);

        if let Some(after) = timer {
            self.wakeups.push(Wakeup {
                after,
                message: Message::Expired(id),
            });
        }
        self.log(DiagnosticEventKind::Shown {
            presentation: id.value(),
            timed: timer.is_some(),
        });
        id
    }

    fn begin_dismiss(
        &mut self,
        id: PresentationId,
        reason: DismissReason,
        completion: Option<Completion>,
    ) -> bool {
        let screen = self.surface.screen_size();
        let Some(active) = self
            .active
            .as_mut()
            .filter(|p| p.id == id && p.displayed)
        else {
            return false;
        };

        active.completions.extend(completion);
        if active.phase == Phase::Dismissing {
            return true;
        }

        active.phase = Phase::Dismissing;
        let animation = Animation::slide_out();
        self.surface
            .animate(id, active.offscreen_center(screen), animation);
        self.wakeups.push(Wakeup {
            after: animation.duration,
            message: Message::DismissFinished(id),
        });
        self.log(DiagnosticEventKind::DismissStarted {
            presentation: id.value(),
            reason,
        });
        true
    }

    fn finish_dismiss(&mut self, id: PresentationId) {
        let Some(mut presentation) = self
            .active
            .take_if(|p| p.id == id && p.phase == Phase::Dismissing)
        else {
            self.log_stale(id);
            return;
        };

        self.surface.detach(id);
        presentation.displayed = false;
        self.log(DiagnosticEventKind::Removed {
            presentation: id.value(),
        });

        for completion in presentation.completions.drain(..) {
            completion();
        }
        drop(presentation);

        self.show_next_deferred();
    }

    fn show_next_deferred(&mut self) {
        if self.active.is_some() {
            return;
        }
        let Some(next) = self.deferred.pop_front() else {
            return;
        };

        let id = self.present(next);
        if !self.deferred.is_empty() {
            self.begin_dismiss(id, DismissReason::Replaced, None);
        }
    }

    fn expire(&mut self, id: PresentationId) {
        let Some(on_timeout) = self.take_displayed_callback(id, Notification::take_on_timeout)
        else {
            self.log_stale(id);
            return;
        };

        self.log(DiagnosticEventKind::TimedOut {
            presentation: id.value(),
        });
        if self.begin_dismiss(id, DismissReason::Timeout, None) {
            if let Some(callback) = on_timeout {
                callback();
            }
        }
    }

    fn tap(&mut self, id: PresentationId) {
        let Some(on_tap) = self.take_displayed_callback(id, Notification::take_on_tap) else {
            self.log_stale(id);
            return;
        };

        self.log(DiagnosticEventKind::Tapped {
            presentation: id.value(),
        });
        self.begin_dismiss(id, DismissReason::Tap, None);
        if let Some(callback) = on_tap {
            callback();
        }
    }

    /// Takes a callback from `id` if it is the displayed presentation.
    ///
    /// The outer `None` means `id` is not eligible for a terminal event.
    fn take_displayed_callback(
        &mut self,
        id: PresentationId,
        take: fn(&mut Notification) -> Option<Callback>,
    ) -> Option<Option<Callback>> {
        self.active
            .as_mut()
            .filter(|p| p.id == id && p.phase == Phase::Displayed)
            .map(|p| take(&mut p.notification))
    }

    fn log_stale(&self, id: PresentationId) {
        self.log(DiagnosticEventKind::StaleWakeup {
            presentation: id.value(),
        });
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}
