// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.
//!
//! Events carry presentation ids and counters only, never notification
//! text, so exported reports contain no user content.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Why a presentation started sliding off screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Explicit `dismiss` / `dismiss_active` call.
    Manual,
    /// The display timer elapsed.
    Timeout,
    /// The user tapped the banner.
    Tap,
    /// A newer `show` request needs the slot.
    Replaced,
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A presentation was attached and started sliding in.
    Shown {
        presentation: u64,
        /// Whether a display timer was armed (false for endless banners).
        timed: bool,
    },

    /// A `show` request arrived while the slot was busy.
    Deferred {
        /// Requests waiting for the slot, including this one.
        pending: usize,
    },

    /// A presentation started its slide-out.
    DismissStarted {
        presentation: u64,
        reason: DismissReason,
    },

    /// A presentation was detached and the slot released.
    Removed { presentation: u64 },

    /// The display timer of a still-active presentation fired.
    TimedOut { presentation: u64 },

    /// The user tapped an active presentation.
    Tapped { presentation: u64 },

    /// A wakeup arrived for a presentation that is no longer eligible.
    StaleWakeup { presentation: u64 },

    /// A request entered a queue's pending buffer.
    Enqueued {
        /// Buffered requests after the push.
        pending: usize,
    },

    /// A queue handed its head request to the manager.
    Dispatched {
        /// Buffered requests left after the pop.
        remaining: usize,
    },

    /// A queue dropped its buffered requests.
    Cleared { dropped: usize },
}
