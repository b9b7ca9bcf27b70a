// SPDX-License-Identifier: MPL-2.0
//! Presentation surface boundary.
//!
//! The manager never draws anything itself. It asks a [`Surface`] to build a
//! banner, place it, slide it, and remove it, and it only ever reads back the
//! banner's extent. [`HeadlessSurface`] records those calls instead of drawing
//! them, which is what tests and headless loops use.

use std::collections::HashMap;
use std::time::Duration;

use iced_core::{Point, Size};

use super::layout::{self, BannerLayout, Metrics, MonospaceMeasure, TextMeasure};
use super::notification::Notification;
use super::presentation::PresentationId;
use super::style::{SoundId, Style};
use crate::config::defaults::{DISMISS_ANIMATION, SHOW_ANIMATION, SHOW_SPRING_DAMPING};

/// Easing applied to a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Spring { damping: f32 },
    EaseInOut,
}

/// A slide animation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub curve: Curve,
}

impl Animation {
    /// Entry slide: short spring.
    #[must_use]
    pub fn slide_in() -> Self {
        Self {
            duration: SHOW_ANIMATION,
            curve: Curve::Spring {
                damping: SHOW_SPRING_DAMPING,
            },
        }
    }

    /// Exit slide. Its duration is also the teardown delay.
    #[must_use]
    pub fn slide_out() -> Self {
        Self {
            duration: DISMISS_ANIMATION,
            curve: Curve::EaseInOut,
        }
    }
}

/// Something that can put banners on screen.
///
/// Positions are banner centers in screen coordinates. Taps are reported back
/// to the manager as [`Message::Tapped`](super::Message::Tapped); sound and
/// image failures are the surface's own business and never surface here.
pub trait Surface {
    /// Size of the area banners are laid out in.
    fn screen_size(&self) -> Size;

    /// Builds the banner for `notification` and returns its extent.
    fn construct(&mut self, id: PresentationId, notification: &Notification, style: &Style)
        -> Size;

    /// Adds the banner to the screen at `at`.
    fn attach(&mut self, id: PresentationId, at: Point);

    /// Removes the banner from the screen and forgets it.
    fn detach(&mut self, id: PresentationId);

    /// Starts sliding the banner to `to`.
    fn animate(&mut self, id: PresentationId, to: Point, animation: Animation);

    /// Fire-and-forget.
    fn play_sound(&mut self, sound: SoundId);
}

/// One recorded [`HeadlessSurface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Attached { id: PresentationId, at: Point },
    Detached(PresentationId),
    Animated {
        id: PresentationId,
        to: Point,
        animation: Animation,
    },
    SoundPlayed(SoundId),
}

/// Surface that lays banners out but only records what it was asked to do.
#[derive(Debug)]
pub struct HeadlessSurface<M = MonospaceMeasure> {
    screen: Size,
    metrics: Metrics,
    measure: M,
    layouts: HashMap<PresentationId, BannerLayout>,
    ops: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    /// Creates a surface of the given size with monospace text estimation.
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self::with_measure(screen, MonospaceMeasure::default())
    }
}

impl Default for HeadlessSurface {
    /// A 320x480 portrait screen.
    fn default() -> Self {
        Self::new(Size::new(320.0, 480.0))
    }
}

impl<M: TextMeasure> HeadlessSurface<M> {
    #[must_use]
    pub fn with_measure(screen: Size, measure: M) -> Self {
        Self {
            screen,
            metrics: Metrics::default(),
            measure,
            layouts: HashMap::new(),
            ops: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Layout of a banner that is currently constructed.
    #[must_use]
    pub fn layout(&self, id: PresentationId) -> Option<&BannerLayout> {
        self.layouts.get(&id)
    }

    /// Number of banners constructed and not yet detached.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.layouts.len()
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Returns and clears the recorded calls.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl<M: TextMeasure> Surface for HeadlessSurface<M> {
    fn screen_size(&self) -> Size {
        self.screen
    }

    fn construct(
        &mut self,
        id: PresentationId,
        notification: &Notification,
        style: &Style,
    ) -> Size {
        let banner = layout::layout(
            notification.title(),
            notification.body(),
            style,
            &self.metrics,
            self.screen.width,
            &self.measure,
        );
        self.layouts.insert(id, banner);
        banner.size
    }

    fn attach(&mut self, id: PresentationId, at: Point) {
        self.ops.push(SurfaceOp::Attached { id, at });
    }

    fn detach(&mut self, id: PresentationId) {
        self.layouts.remove(&id);
        self.ops.push(SurfaceOp::Detached(id));
    }

    fn animate(&mut self, id: PresentationId, to: Point, animation: Animation) {
        self.ops.push(SurfaceOp::Animated { id, to, animation });
    }

    fn play_sound(&mut self, sound: SoundId) {
        self.ops.push(SurfaceOp::SoundPlayed(sound));
    }
}
