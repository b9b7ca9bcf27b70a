// SPDX-License-Identifier: MPL-2.0
//! Persisted banner styling stored in a `notifications.toml` file.
//!
//! Every field is optional; [`Config::to_style`] falls back to the built-in
//! default for anything missing or invalid.
//!
//! # Examples
//!
//! ```no_run
//! use toast_banner::config::{self, Config};
//! use toast_banner::notifications::{HeadlessSurface, Manager, Position};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.position = Some(Position::Bottom);
//! config.background_color = Some("#202020".to_string());
//! config::save(&config).expect("Failed to save config");
//!
//! let manager = Manager::with_style(HeadlessSurface::default(), config.to_style());
//! ```

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};

use iced_core::{image, Color, Size};
use serde::{Deserialize, Serialize};

use crate::domain::DisplayDuration;
use crate::error::Result;
use crate::notifications::{Icon, Position, SoundId, Style};
use defaults::{DEFAULT_ICON_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE};

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "ToastBanner";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub position: Option<Position>,
    /// Seconds; must be positive to take effect.
    pub default_duration_secs: Option<f64>,
    /// `#RRGGBB` or `#RRGGBBAA`.
    pub background_color: Option<String>,
    pub title_color: Option<String>,
    pub body_color: Option<String>,
    pub separator_color: Option<String>,
    pub title_font_size: Option<f32>,
    pub body_font_size: Option<f32>,
    pub icon_path: Option<PathBuf>,
    pub icon_size: Option<f32>,
    pub sound: Option<SoundId>,
}

impl Config {
    /// Resolves this configuration into a [`Style`].
    #[must_use]
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();

        if let Some(position) = self.position {
            style.position = position;
        }
        if let Some(DisplayDuration::For(duration)) =
            self.default_duration_secs.map(DisplayDuration::from_secs_f64)
        {
            style = style.with_default_duration(duration);
        }

        apply_color(&mut style.background, self.background_color.as_deref());
        apply_color(&mut style.title.color, self.title_color.as_deref());
        apply_color(&mut style.body.color, self.body_color.as_deref());
        apply_color(&mut style.separator, self.separator_color.as_deref());

        if let Some(size) = self.title_font_size.and_then(clamp_font_size) {
            style.title.size = size;
        }
        if let Some(size) = self.body_font_size.and_then(clamp_font_size) {
            style.body.size = size;
        }

        if let Some(path) = &self.icon_path {
            let side = self
                .icon_size
                .filter(|size| size.is_finite() && *size > 0.0)
                .unwrap_or(DEFAULT_ICON_SIZE);
            style.icon = Some(Icon::new(
                image::Handle::from_path(path),
                Size::new(side, side),
            ));
        }

        style.sound = self.sound;
        style
    }
}

fn apply_color(target: &mut Color, hex: Option<&str>) {
    if let Some(color) = hex.and_then(parse_hex_color) {
        *target = color;
    }
}

fn clamp_font_size(size: f32) -> Option<f32> {
    size.is_finite().then(|| size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE))
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { u8::MAX };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// # Errors
///
/// Returns `Error::Io` if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Config` if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads from `path`. Unparsable content yields the default configuration.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Writes to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `Error::Io` on filesystem failures and `Error::Config` if the
/// configuration cannot be encoded.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
