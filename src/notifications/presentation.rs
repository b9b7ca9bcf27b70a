// SPDX-License-Identifier: MPL-2.0
//! The on-screen instance of one notification.

use std::sync::atomic::{AtomicU64, Ordering};

use iced_core::{Point, Size};

use super::notification::{Callback, Notification};
use super::style::Position;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a presentation, unique across all managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresentationId(u64);

impl PresentationId {
    pub(crate) fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Where a presentation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Showing,
    Displayed,
    Dismissing,
}

/// Manager-side bookkeeping for the banner currently in the slot.
pub(crate) struct Presentation {
    pub id: PresentationId,
    pub notification: Notification,
    pub extent: Size,
    /// Snapshotted from the style at construction.
    pub position: Position,
    pub phase: Phase,
    /// True from attach until teardown.
    pub displayed: bool,
    /// Run in order after teardown.
    pub completions: Vec<Callback>,
}

impl Presentation {
    pub fn new(
        id: PresentationId,
        notification: Notification,
        extent: Size,
        position: Position,
    ) -> Self {
        Self {
            id,
            notification,
            extent,
            position,
            phase: Phase::Showing,
            displayed: false,
            completions: Vec::new(),
        }
    }

    /// Center of the banner once it has slid in.
    pub fn resting_center(&self, screen: Size) -> Point {
        resting_center(self.position, self.extent, screen)
    }

    /// Center of the banner just outside the screen edge it enters from.
    pub fn offscreen_center(&self, screen: Size) -> Point {
        offscreen_center(self.position, self.extent, screen)
    }
}

pub(crate) fn resting_center(position: Position, extent: Size, screen: Size) -> Point {
    let x = screen.width / 2.0;
    match position {
        Position::Top => Point::new(x, extent.height / 2.0),
        Position::Bottom => Point::new(x, screen.height - extent.height / 2.0),
    }
}

pub(crate) fn offscreen_center(position: Position, extent: Size, screen: Size) -> Point {
    let x = screen.width / 2.0;
    match position {
        Position::Top => Point::new(x, -extent.height / 2.0),
        Position::Bottom => Point::new(x, screen.height + extent.height / 2.0),
    }
}
