// SPDX-License-Identifier: MPL-2.0
//! Core notification data structure.
//!
//! A [`Notification`] is the request a caller hands to a manager or a queue:
//! what to display, for how long, and what to run when the banner is tapped
//! or times out.

use std::fmt;
use std::time::Duration;

use crate::domain::DisplayDuration;

/// One-shot callback attached to a notification.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// A notification request.
pub struct Notification {
    title: String,
    body: Option<String>,
    duration: DisplayDuration,
    on_tap: Option<Callback>,
    on_timeout: Option<Callback>,
}

impl Notification {
    /// Creates a notification with a title, no body, and the default duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: None,
            duration: DisplayDuration::Default,
            on_tap: None,
            on_timeout: None,
        }
    }

    /// Sets the text displayed under the title. An empty body is not shown.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets how long the banner stays on screen.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<DisplayDuration>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the duration from raw seconds (`-1.0` = endless, `<= 0` = default).
    #[must_use]
    pub fn with_duration_secs(self, secs: f64) -> Self {
        self.with_duration(DisplayDuration::from_secs_f64(secs))
    }

    /// Keeps the banner on screen until it is tapped or dismissed.
    #[must_use]
    pub fn endless(self) -> Self {
        self.with_duration(DisplayDuration::Endless)
    }

    /// Runs `callback` when the user taps the banner (the banner dismisses too).
    #[must_use]
    pub fn on_tap(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    /// Runs `callback` only if the display timer dismisses the banner.
    #[must_use]
    pub fn on_timeout(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_timeout = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body, treating an empty string as absent.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|body| !body.is_empty())
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    /// Resolves the display timer against a manager default.
    #[must_use]
    pub fn display_time(&self, default: Duration) -> Option<Duration> {
        self.duration.resolve(default)
    }

    #[must_use]
    pub fn has_on_tap(&self) -> bool {
        self.on_tap.is_some()
    }

    #[must_use]
    pub fn has_on_timeout(&self) -> bool {
        self.on_timeout.is_some()
    }

    pub(crate) fn take_on_tap(&mut self) -> Option<Callback> {
        self.on_tap.take()
    }

    pub(crate) fn take_on_timeout(&mut self) -> Option<Callback> {
        self.on_timeout.take()
    }

    /// Replaces both callbacks with `f(original)`.
    ///
    /// Used by the queue to chain its own continuation after the caller's.
    pub(crate) fn wrap_callbacks(&mut self, mut f: impl FnMut(Option<Callback>) -> Callback) {
        self.on_tap = Some(f(self.on_tap.take()));
        self.on_timeout = Some(f(self.on_timeout.take()));
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("duration", &self.duration)
            .field("on_tap", &self.on_tap.is_some())
            .field("on_timeout", &self.on_timeout.is_some())
            .finish()
    }
}
