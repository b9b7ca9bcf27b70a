// SPDX-License-Identifier: MPL-2.0
//! Domain newtypes.
//!
//! Type-safe wrappers ensuring values are always meaningful before they
//! reach the state machine.

use std::time::Duration;

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a notification stays on screen before it dismisses itself.
///
/// Raw second values coming from callers are folded into three cases:
/// the endless sentinel (`-1.0`), a positive finite time, and everything
/// else, which means "use the manager's default".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DisplayDuration {
    /// Use the default duration configured on the manager.
    #[default]
    Default,
    /// Stay on screen for exactly this long.
    For(Duration),
    /// Never dismiss automatically.
    Endless,
}

impl DisplayDuration {
    /// Raw value reserved for [`DisplayDuration::Endless`].
    pub const ENDLESS_SECS: f64 = crate::config::defaults::ENDLESS_DURATION_SECS;

    /// Interprets a raw number of seconds.
    ///
    /// `-1.0` is endless; zero, other negatives, and non-finite values fall
    /// back to the default duration rather than dismissing immediately.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs == Self::ENDLESS_SECS {
            Self::Endless
        } else if secs.is_finite() && secs > 0.0 {
            Duration::try_from_secs_f64(secs).map_or(Self::Default, Self::For)
        } else {
            Self::Default
        }
    }

    /// Returns the time to arm the display timer for, or `None` if endless.
    #[must_use]
    pub fn resolve(self, default: Duration) -> Option<Duration> {
        match self {
            Self::Default => Some(default),
            Self::For(duration) if duration.is_zero() => Some(default),
            Self::For(duration) => Some(duration),
            Self::Endless => None,
        }
    }

    /// Returns whether this duration never expires.
    #[must_use]
    pub fn is_endless(self) -> bool {
        matches!(self, Self::Endless)
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::For(duration)
    }
}

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Buffer capacity bounds (50 to 5000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 50;
    /// Maximum buffer capacity.
    pub const MAX: usize = 5000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Buffer capacity for diagnostic events, clamped to the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
