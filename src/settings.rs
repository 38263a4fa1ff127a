//! Game settings and tuning
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! file only needs the keys it wants to override.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Session tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Session ===
    /// Taps needed to win
    pub hits_to_win: u32,
    /// Countdown length in milliseconds
    pub timeout_ms: u64,
    /// Render loop sleep in milliseconds
    pub loop_delay_ms: u64,

    // === Physics ===
    /// Launch speed (units per tick)
    pub initial_speed: f32,
    /// Multiplicative speed boost per tap
    pub tap_boost: f32,
    /// Distance kept from the container edges
    pub edge_epsilon: f32,
    /// RNG seed for the launch direction (random when unset)
    pub seed: Option<u64>,

    // === Sprites ===
    /// Target sprite width/height
    pub target_size: Vec2,
    /// Indicator sprite width/height
    pub indicator_size: Vec2,
    /// Opacity falloff per indicator
    pub indicator_fade: f32,
    /// Scale between consecutive indicators
    pub indicator_scale: f32,
    /// Offset between consecutive indicators
    pub indicator_offset: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hits_to_win: HITS_TO_WIN,
            timeout_ms: TIMEOUT_MS,
            loop_delay_ms: LOOP_DELAY_MS,

            initial_speed: INITIAL_SPEED,
            tap_boost: TAP_BOOST,
            edge_epsilon: EDGE_EPSILON,
            seed: None,

            target_size: Vec2::from_array(TARGET_SIZE),
            indicator_size: Vec2::from_array(INDICATOR_SIZE),
            indicator_fade: INDICATOR_FADE,
            indicator_scale: INDICATOR_SCALE,
            indicator_offset: Vec2::from_array(INDICATOR_OFFSET),
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn loop_delay(&self) -> Duration {
        Duration::from_millis(self.loop_delay_ms)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if self.hits_to_win == 0 {
            return Err(Error::InvalidSetting {
                name: "hits_to_win",
                expected: "at least 1",
            });
        }
        if self.timeout_ms == 0 {
            return Err(Error::InvalidSetting {
                name: "timeout_ms",
                expected: "a positive duration",
            });
        }
        if !(self.initial_speed.is_finite() && self.initial_speed > 0.0) {
            return Err(Error::InvalidSetting {
                name: "initial_speed",
                expected: "a positive finite number",
            });
        }
        if !(self.tap_boost.is_finite() && self.tap_boost > 0.0) {
            return Err(Error::InvalidSetting {
                name: "tap_boost",
                expected: "a positive finite number",
            });
        }
        if !(self.edge_epsilon.is_finite() && self.edge_epsilon >= 0.0) {
            return Err(Error::InvalidSetting {
                name: "edge_epsilon",
                expected: "a non-negative finite number",
            });
        }
        if self.target_size.min_element() <= 0.0 || !self.target_size.is_finite() {
            return Err(Error::InvalidSetting {
                name: "target_size",
                expected: "positive finite width and height",
            });
        }
        if self.indicator_size.min_element() <= 0.0 || !self.indicator_size.is_finite() {
            return Err(Error::InvalidSetting {
                name: "indicator_size",
                expected: "positive finite width and height",
            });
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| Error::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
