// SPDX-License-Identifier: MPL-2.0
//! Styling configuration applied to banners.
//!
//! A manager holds one [`Style`]. It is read (cloned) when a notification is
//! presented, so changing it later never affects a banner already on screen.

use std::time::Duration;

use iced_core::{font, image, Color, Font, Size};
use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_BODY_FONT_SIZE, DEFAULT_DURATION_SECS, DEFAULT_TITLE_FONT_SIZE,
};

/// Screen edge a banner slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// Identifier of a sound the presentation surface knows how to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(pub u32);

/// Color, font, and size of one text line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: Font,
    pub size: f32,
}

impl TextStyle {
    #[must_use]
    pub fn new(color: Color, font: Font, size: f32) -> Self {
        Self { color, font, size }
    }
}

/// Icon drawn on the leading edge of the banner.
#[derive(Debug, Clone)]
pub struct Icon {
    pub handle: image::Handle,
    /// Drawn size; the text column is shifted right by its width.
    pub size: Size,
}

impl Icon {
    #[must_use]
    pub fn new(handle: image::Handle, size: Size) -> Self {
        Self { handle, size }
    }
}

/// Complete banner styling for one manager.
#[derive(Debug, Clone)]
pub struct Style {
    pub background: Color,
    pub title: TextStyle,
    pub body: TextStyle,
    pub separator: Color,
    pub icon: Option<Icon>,
    /// Display time for notifications that do not carry their own.
    pub default_duration: Duration,
    pub position: Position,
    /// Played when a banner starts sliding in.
    pub sound: Option<SoundId>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            title: TextStyle::new(Color::BLACK, bold(Font::DEFAULT), DEFAULT_TITLE_FONT_SIZE),
            body: TextStyle::new(Color::BLACK, Font::DEFAULT, DEFAULT_BODY_FONT_SIZE),
            separator: Color::TRANSPARENT,
            icon: None,
            default_duration: Duration::from_secs_f64(DEFAULT_DURATION_SECS),
            position: Position::Top,
            sound: None,
        }
    }
}

impl Style {
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_sound(mut self, sound: SoundId) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Sets the default display time. Zero is ignored.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.default_duration = duration;
        }
        self
    }

    /// Width taken by the icon, or zero without one.
    #[must_use]
    pub fn icon_width(&self) -> f32 {
        self.icon.as_ref().map_or(0.0, |icon| icon.size.width)
    }
}

/// Returns `font` with a bold weight.
#[must_use]
pub fn bold(font: Font) -> Font {
    Font {
        weight: font::Weight::Bold,
        ..font
    }
}
