// SPDX-License-Identifier: MPL-2.0
//! Toast presentation configuration, including loading and saving
//! settings to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config::{self, ToastConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow down the entrance animation
//! config.fade_in_secs = 0.8;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::surface::Anchor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "toastline";

/// Durations and placement used when presenting toasts.
///
/// Seconds are stored as `f32` for TOML friendliness; use the accessor
/// methods to get [`Duration`] values clamped to non-negative time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Display duration for a standard presentation.
    pub default_duration_secs: f32,
    /// Display duration used by `present_simple`.
    pub simple_duration_secs: f32,
    /// Distance from the anchored edge, in logical pixels.
    pub default_padding: f32,
    /// Edge toasts are pinned to.
    pub default_anchor: Anchor,
    /// Entrance fade duration.
    pub fade_in_secs: f32,
    /// Exit fade duration, also used for explicit dismissal.
    pub fade_out_secs: f32,
    /// Slide-off duration for swipe dismissal.
    pub slide_out_secs: f32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: defaults::DEFAULT_DURATION_SECS,
            simple_duration_secs: defaults::SIMPLE_DURATION_SECS,
            default_padding: defaults::DEFAULT_PADDING,
            default_anchor: Anchor::Top,
            fade_in_secs: defaults::FADE_IN_SECS,
            fade_out_secs: defaults::FADE_OUT_SECS,
            slide_out_secs: defaults::SLIDE_OUT_SECS,
        }
    }
}

impl ToastConfig {
    pub fn default_duration(&self) -> Duration {
        seconds(self.default_duration_secs)
    }

    pub fn simple_duration(&self) -> Duration {
        seconds(self.simple_duration_secs)
    }

    pub fn fade_in(&self) -> Duration {
        seconds(self.fade_in_secs)
    }

    pub fn fade_out(&self) -> Duration {
        seconds(self.fade_out_secs)
    }

    pub fn slide_out(&self) -> Duration {
        seconds(self.slide_out_secs)
    }
}

fn seconds(value: f32) -> Duration {
    Duration::from_secs_f32(value.max(0.0))
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
