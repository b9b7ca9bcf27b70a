// SPDX-License-Identifier: MPL-2.0
//! Banner layout math.
//!
//! Computes where the title, body, icon, and separator go for a given screen
//! width, and therefore the banner's height. The manager only consumes the
//! resulting extent; surfaces use the full [`BannerLayout`] to draw.

use iced_core::{Point, Rectangle, Size};

use super::style::{Position, Style, TextStyle};
use crate::config::defaults::{
    BANNER_PADDING, BODY_TOP_PADDING, SEPARATOR_HEIGHT, STATUS_BAR_HEIGHT,
};

/// Measures wrapped text.
pub trait TextMeasure {
    /// Returns the size `text` occupies when wrapped at `max_width`.
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size;
}

/// Fixed-advance text estimator.
///
/// Every glyph is `advance * size` wide and every line `line_height * size`
/// tall. Good enough for headless rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size {
        let chars = text.chars().count();
        if chars == 0 {
            return Size::new(0.0, 0.0);
        }

        let glyph = (style.size * self.advance).max(f32::EPSILON);
        let per_line = ((max_width / glyph).floor() as usize).max(1);
        let lines = chars.div_ceil(per_line);

        Size::new(
            chars.min(per_line) as f32 * glyph,
            lines as f32 * style.size * self.line_height,
        )
    }
}

/// Spacing used by [`layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub padding: f32,
    /// Extra top inset for top banners; zero when the status bar is hidden.
    pub status_bar_height: f32,
    pub body_top_padding: f32,
    pub separator_height: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            padding: BANNER_PADDING,
            status_bar_height: STATUS_BAR_HEIGHT,
            body_top_padding: BODY_TOP_PADDING,
            separator_height: SEPARATOR_HEIGHT,
        }
    }
}

impl Metrics {
    /// Default metrics with or without the status bar inset.
    #[must_use]
    pub fn with_status_bar(visible: bool) -> Self {
        Self {
            status_bar_height: if visible { STATUS_BAR_HEIGHT } else { 0.0 },
            ..Self::default()
        }
    }
}

/// Frames of every banner element, relative to the banner's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub title: Rectangle,
    pub body: Option<Rectangle>,
    /// Icon frame, vertically centered on the text block.
    pub icon: Option<Rectangle>,
    pub separator: Rectangle,
    pub size: Size,
}

/// Lays out a banner `width` points wide.
pub fn layout(
    title: &str,
    body: Option<&str>,
    style: &Style,
    metrics: &Metrics,
    width: f32,
    measure: &impl TextMeasure,
) -> BannerLayout {
    let padding = metrics.padding;
    let text_x = 2.0 * padding + style.icon_width();
    let top_inset = if style.position == Position::Top {
        metrics.status_bar_height
    } else {
        0.0
    };
    let text_width = (width - text_x - padding).max(0.0);

    let title_size = measure.measure(title, &style.title, text_width);
    let title_frame = Rectangle {
        x: text_x,
        y: top_inset + padding,
        width: title_size.width,
        height: title_size.height,
    };

    let body_frame = body.filter(|body| !body.is_empty()).map(|body| {
        let size = measure.measure(body, &style.body, text_width);
        Rectangle {
            x: text_x,
            y: title_frame.y + title_frame.height + metrics.body_top_padding,
            width: size.width,
            height: size.height,
        }
    });

    let text_bottom = body_frame.map_or(title_frame.y + title_frame.height, |frame| {
        frame.y + frame.height
    });
    let mut height = text_bottom + padding;

    let icon_frame = style.icon.as_ref().map(|icon| {
        let center_y = ((top_inset + height) / 2.0).round();
        Rectangle::new(
            Point::new(padding, center_y - icon.size.height / 2.0),
            icon.size,
        )
    });

    // Top banners draw the separator on their lower edge, bottom banners on the upper one.
    let separator_y = match style.position {
        Position::Top => height,
        Position::Bottom => 0.0,
    };
    let separator = Rectangle {
        x: 0.0,
        y: separator_y,
        width,
        height: metrics.separator_height,
    };
    height += metrics.separator_height;

    BannerLayout {
        title: title_frame,
        body: body_frame,
        icon: icon_frame,
        separator,
        size: Size::new(width, height),
    }
}
