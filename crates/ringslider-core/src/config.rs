use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::quantize::DEFAULT_TICK_WIDTH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Pixels of scroll travel per tick
    #[serde(default = "default_tick_width")]
    pub tick_width: f64,
    /// Value change per tick
    #[serde(default = "default_stride")]
    pub stride: f64,
    /// Lower value bound
    #[serde(default = "default_value_min")]
    pub value_min: f64,
    /// Upper value bound
    #[serde(default = "default_value_max")]
    pub value_max: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            tick_width: default_tick_width(),
            stride: default_stride(),
            value_min: default_value_min(),
            value_max: default_value_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Logical pixels per terminal column
    #[serde(default = "default_px_per_cell")]
    pub px_per_cell: f64,
    /// Tick groups per viewport-wide run of the strip
    #[serde(default = "default_groups_per_viewport")]
    pub groups_per_viewport: u16,
    /// Viewport-wide runs in the backing strip (minimum 2)
    #[serde(default = "default_strip_runs")]
    pub strip_runs: u32,
    /// Glide velocity half-life in milliseconds
    #[serde(default = "default_glide_half_life")]
    pub glide_half_life_ms: u64,
    /// Feedback pulse duration in milliseconds
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            px_per_cell: default_px_per_cell(),
            groups_per_viewport: default_groups_per_viewport(),
            strip_runs: default_strip_runs(),
            glide_half_life_ms: default_glide_half_life(),
            pulse_ms: default_pulse_ms(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "L", "<C-h>" (Ctrl+h), "<Left>", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the demo
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Nudge one tick left (value decreases)
    #[serde(default = "default_key_step_left")]
    pub step_left: String,
    /// Nudge one tick right (value increases)
    #[serde(default = "default_key_step_right")]
    pub step_right: String,
    /// Fling left with glide
    #[serde(default = "default_key_fling_left")]
    pub fling_left: String,
    /// Fling right with glide
    #[serde(default = "default_key_fling_right")]
    pub fling_right: String,
    /// Reset value and scroll position
    #[serde(default = "default_key_reset")]
    pub reset: String,
    /// Toggle the help popup
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            step_left: default_key_step_left(),
            step_right: default_key_step_right(),
            fling_left: default_key_fling_left(),
            fling_right: default_key_fling_right(),
            reset: default_key_reset(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_step_left() -> String { "h".to_string() }
fn default_key_step_right() -> String { "l".to_string() }
fn default_key_fling_left() -> String { "H".to_string() }
fn default_key_fling_right() -> String { "L".to_string() }
fn default_key_reset() -> String { "0".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_tick_width() -> f64 {
    DEFAULT_TICK_WIDTH
}

fn default_stride() -> f64 {
    1.0
}

fn default_value_min() -> f64 {
    f64::MIN
}

fn default_value_max() -> f64 {
    f64::MAX
}

fn default_tick_rate() -> u64 {
    100
}

fn default_px_per_cell() -> f64 {
    5.0 // four columns of drag per tick at the default tick width
}

fn default_groups_per_viewport() -> u16 {
    6
}

fn default_strip_runs() -> u32 {
    2
}

fn default_glide_half_life() -> u64 {
    150
}

fn default_pulse_ms() -> u64 {
    90
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/ringslider/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ringslider")
            .join("config.toml")
    }

    /// Reject values the interaction core cannot work with.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.slider.tick_width.is_finite() || self.slider.tick_width <= 0.0 {
            return Err(crate::Error::Config(format!(
                "slider.tick_width must be positive and finite, got {}",
                self.slider.tick_width
            )));
        }
        if !self.slider.stride.is_finite() {
            return Err(crate::Error::Config(format!(
                "slider.stride must be finite, got {}",
                self.slider.stride
            )));
        }
        if self.slider.value_min > self.slider.value_max {
            return Err(crate::Error::Config(format!(
                "slider.value_min {} exceeds slider.value_max {}",
                self.slider.value_min, self.slider.value_max
            )));
        }
        if !self.ui.px_per_cell.is_finite() || self.ui.px_per_cell <= 0.0 {
            return Err(crate::Error::Config(format!(
                "ui.px_per_cell must be positive and finite, got {}",
                self.ui.px_per_cell
            )));
        }
        if self.ui.groups_per_viewport == 0 {
            return Err(crate::Error::Config(
                "ui.groups_per_viewport must be at least 1".to_string(),
            ));
        }
        if self.ui.strip_runs < 2 {
            return Err(crate::Error::Config(format!(
                "ui.strip_runs must be at least 2, got {}",
                self.ui.strip_runs
            )));
        }
        Ok(())
    }

    /// Value range as a closed interval.
    pub fn value_range(&self) -> std::ops::RangeInclusive<f64> {
        self.slider.value_min..=self.slider.value_max
    }
}
