// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the notification core,
//! the configuration layer, and diagnostics. It depends on `std` only.
//!
//! # Types
//!
//! - [`DisplayDuration`]: How long a notification stays on screen
//! - [`BufferCapacity`]: Capacity of the diagnostic event buffer

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity, DisplayDuration};
