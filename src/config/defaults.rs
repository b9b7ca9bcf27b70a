// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Duration**: Display time of a banner and the endless sentinel
//! - **Animation**: Slide-in / slide-out timing
//! - **Layout**: Banner padding and typography metrics
//! - **Diagnostics**: Event buffer bounds

use std::time::Duration;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Display time used when a notification does not carry its own (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 3.0;

/// Raw duration value meaning "never auto-dismiss".
pub const ENDLESS_DURATION_SECS: f64 = -1.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Slide-out animation length. Teardown runs once this much time has passed.
pub const DISMISS_ANIMATION: Duration = Duration::from_millis(300);

/// Slide-in animation length (slightly longer so the spring can settle).
pub const SHOW_ANIMATION: Duration = Duration::from_millis(400);

/// Damping ratio of the slide-in spring.
pub const SHOW_SPRING_DAMPING: f32 = 0.8;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum padding around the banner content.
pub const BANNER_PADDING: f32 = 15.0;

/// Height reserved for the status bar when a top banner sits under it.
pub const STATUS_BAR_HEIGHT: f32 = 20.0;

/// Gap between the title and the body text.
pub const BODY_TOP_PADDING: f32 = 5.0;

/// Thickness of the separator line.
pub const SEPARATOR_HEIGHT: f32 = 1.0;

/// Edge length of the icon when the configuration does not set one.
pub const DEFAULT_ICON_SIZE: f32 = 24.0;

/// Title font size.
pub const DEFAULT_TITLE_FONT_SIZE: f32 = 14.0;

/// Body font size.
pub const DEFAULT_BODY_FONT_SIZE: f32 = 12.0;

/// Smallest accepted font size.
pub const MIN_FONT_SIZE: f32 = 6.0;

/// Largest accepted font size.
pub const MAX_FONT_SIZE: f32 = 72.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum number of diagnostic events retained.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 50;

/// Maximum number of diagnostic events retained.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_SECS > 0.0);
    assert!(ENDLESS_DURATION_SECS < 0.0);

    assert!(DISMISS_ANIMATION.as_millis() > 0);
    assert!(SHOW_ANIMATION.as_millis() >= DISMISS_ANIMATION.as_millis());
    assert!(SHOW_SPRING_DAMPING > 0.0);
    assert!(SHOW_SPRING_DAMPING <= 1.0);

    assert!(BANNER_PADDING >= 0.0);
    assert!(SEPARATOR_HEIGHT >= 0.0);
    assert!(MIN_FONT_SIZE > 0.0);
    assert!(MAX_FONT_SIZE > MIN_FONT_SIZE);
    assert!(DEFAULT_TITLE_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_TITLE_FONT_SIZE <= MAX_FONT_SIZE);
    assert!(DEFAULT_BODY_FONT_SIZE >= MIN_FONT_SIZE);
    assert!(DEFAULT_BODY_FONT_SIZE <= MAX_FONT_SIZE);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
