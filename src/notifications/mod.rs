// SPDX-License-Identifier: MPL-2.0
//! In-app banner notifications.
//!
//! A [`Manager`] shows one banner at a time on a [`Surface`], slides it in,
//! arms its display timer, and slides it out on timeout, tap, or request. A
//! [`NotificationQueue`] feeds a manager from a FIFO so many callers can post
//! notifications without ever overlapping them.
//!
//! # Event loop
//!
//! Nothing here sleeps. Managers return [`Wakeup`]s that the embedding loop
//! delivers back through `update` once their delay has passed: with tokio via
//! [`driver::deliver`], or deterministically via [`Timeline`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use toast_banner::notifications::{
//!     HeadlessSurface, Manager, Notification, NotificationQueue, State, Timeline,
//! };
//!
//! let mut queue = NotificationQueue::new(Manager::new(HeadlessSurface::default()));
//! let mut timeline = Timeline::new();
//!
//! queue.enqueue(Notification::new("Saved").with_body("3 files written"));
//! queue.enqueue(Notification::new("Synced").with_duration_secs(1.0));
//! assert_eq!(queue.pending_len(), 1);
//!
//! timeline.advance(Duration::from_secs(10), &mut queue);
//! assert_eq!(queue.manager().state(), State::Idle);
//! ```

pub mod driver;
pub mod layout;
mod manager;
mod notification;
mod presentation;
mod queue;
mod style;
mod surface;
mod timeline;

pub use layout::{BannerLayout, Metrics, MonospaceMeasure, TextMeasure};
pub use manager::{Completion, Manager, ManagerHandle, Message, State, Wakeup};
pub use notification::{Callback, Notification};
pub use presentation::PresentationId;
pub use queue::{NotificationQueue, QueueHandle};
pub use style::{bold, Icon, Position, SoundId, Style, TextStyle};
pub use surface::{Animation, Curve, HeadlessSurface, Surface, SurfaceOp};
pub use timeline::{EventTarget, Timeline};
