// SPDX-License-Identifier: MPL-2.0
//! `toast_banner` shows transient in-app notification banners.
//!
//! A [`Manager`] keeps at most one banner on screen, sliding it in from the
//! top or bottom edge and out again on timeout, tap, or request. A
//! [`NotificationQueue`] serializes many requests through one manager in FIFO
//! order. Styling can be persisted with [`config`], and lifecycle events are
//! recorded by [`diagnostics`].

#![doc(html_root_url = "https://docs.rs/toast_banner/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;

pub use error::{Error, Result};
pub use notifications::{
    Manager, ManagerHandle, Notification, NotificationQueue, QueueHandle, Style, Surface,
};
