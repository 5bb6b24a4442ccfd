//! Runtime configuration, loaded from an optional JSON file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DEFAULT_STAGNATION_THRESHOLD, StepMode};

/// Environment variable naming the JSON config file
pub const CONFIG_ENV: &str = "LIFE_BADGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Display, pacing and engine settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Display width in pixels
    pub display_width: u32,
    /// Display height in pixels
    pub display_height: u32,
    /// Pixels per cell, horizontally
    pub pixel_width: u32,
    /// Pixels per cell, vertically
    pub pixel_height: u32,
    /// Delay between generations
    pub frame_delay_ms: u32,
    /// Repeats before the grid is reseeded
    pub stagnation_threshold: u32,
    pub step_mode: StepMode,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            display_width: 320,
            display_height: 240,
            pixel_width: 20,
            pixel_height: 20,
            frame_delay_ms: 100,
            stagnation_threshold: DEFAULT_STAGNATION_THRESHOLD,
            step_mode: StepMode::Serial,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV`], or defaults when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width == 0 || self.display_height == 0 {
            return Err(ConfigError::Invalid("display size must be positive"));
        }
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(ConfigError::Invalid("cell pixel size must be positive"));
        }
        if self.pixel_width > self.display_width || self.pixel_height > self.display_height {
            return Err(ConfigError::Invalid("cell pixel size exceeds display"));
        }
        if self.frame_delay_ms == 0 {
            return Err(ConfigError::Invalid("frame delay must be positive"));
        }
        if self.stagnation_threshold == 0 {
            return Err(ConfigError::Invalid("stagnation threshold must be at least 1"));
        }
        Ok(())
    }

    /// Cell grid size for the configured display; partial cells are dropped
    pub fn grid_dimensions(&self) -> (usize, usize) {
        cells_for_display(
            self.display_width as f32,
            self.display_height as f32,
            self.pixel_width,
            self.pixel_height,
        )
    }

    /// Seconds between generations
    pub fn frame_delay_secs(&self) -> f32 {
        self.frame_delay_ms as f32 / 1000.0
    }
}

/// Whole cells that fit on a display, at least one in each direction
pub fn cells_for_display(width: f32, height: f32, pixel_width: u32, pixel_height: u32) -> (usize, usize) {
    let cols = (width / pixel_width.max(1) as f32) as usize;
    let rows = (height / pixel_height.max(1) as f32) as usize;
    (cols.max(1), rows.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_badge() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_dimensions(), (16, 12));
        assert_eq!(config.stagnation_threshold, 20);
        assert!((config.frame_delay_secs() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LifeConfig::from_json_str(r#"{ "pixel_width": 8, "step_mode": "parallel" }"#).unwrap();
        assert_eq!(config.pixel_width, 8);
        assert_eq!(config.pixel_height, 20);
        assert_eq!(config.step_mode, StepMode::Parallel);
        assert_eq!(config.grid_dimensions(), (40, 12));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            LifeConfig::from_json_str(r#"{ "stagnation_threshold": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            LifeConfig::from_json_str(r#"{ "pixel_width": 400 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            LifeConfig::from_json_str(r#"{ "frame_delay_ms": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            LifeConfig::from_json_str("{ display_width: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = LifeConfig::load(Path::new("/nonexistent/life_badge.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_tiny_display_still_has_a_cell() {
        assert_eq!(cells_for_display(5.0, 5.0, 20, 20), (1, 1));
    }
}
