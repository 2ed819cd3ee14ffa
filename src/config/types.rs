use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rating::{DEFAULT_MAX_UNITS, DEFAULT_MIN_UNITS};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the star row shown on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Number of stars requested at startup. Out-of-range values are
    /// clamped by the control, not rejected here.
    #[serde(default = "default_stars")]
    pub stars: usize,
    /// Rating preset after construction (silent, no dialog).
    #[serde(default = "default_initial_rating")]
    pub initial_rating: usize,
    /// Star count applied right after the preset, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reconfigure_to: Option<usize>,
    #[serde(default = "default_min_stars")]
    pub min_stars: usize,
    #[serde(default = "default_max_stars")]
    pub max_stars: usize,
}

/// Terminal surface settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on stars.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the user cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_stars() -> usize {
    6
}

fn default_initial_rating() -> usize {
    3
}

fn default_min_stars() -> usize {
    DEFAULT_MIN_UNITS
}

fn default_max_stars() -> usize {
    DEFAULT_MAX_UNITS
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            stars: default_stars(),
            initial_rating: default_initial_rating(),
            reconfigure_to: None,
            min_stars: default_min_stars(),
            max_stars: default_max_stars(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
