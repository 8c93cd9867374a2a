//! Configuration file support for minipaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/minipaint/config.toml` (or a path given on the command line).
//! Settings cover paint, pointer sampling, the decorative frame, and render pacing.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, FrameConfig, InputConfig, PerformanceConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// background_color = [255, 171, 145]
/// stroke_color = "black"
/// stroke_width = 12.0
///
/// [input]
/// touch_tolerance = 8.0
///
/// [frame]
/// inset = 40
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Paint settings (colors, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Pointer sampling settings
    #[serde(default)]
    pub input: InputConfig,

    /// Decorative frame settings
    #[serde(default)]
    pub frame: FrameConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No file was found; built-in defaults are in use
    Default,
    /// Loaded from the given file
    File(PathBuf),
}

/// A validated configuration together with its origin.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 100.0
    /// - `touch_tolerance`: 0.0 - 100.0
    /// - `frame.inset`: 0 - 1000
    /// - `buffer_count`: 1 - 4
    pub fn validate_and_clamp(&mut self) {
        if !self.drawing.stroke_width.is_finite() {
            warn!(
                "Invalid stroke_width {}, using {:.1}",
                self.drawing.stroke_width,
                DrawingConfig::default().stroke_width
            );
            self.drawing.stroke_width = DrawingConfig::default().stroke_width;
        } else if !(1.0..=100.0).contains(&self.drawing.stroke_width) {
            warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 100.0);
        }

        if !self.input.touch_tolerance.is_finite() {
            warn!(
                "Invalid touch_tolerance {}, using {:.1}",
                self.input.touch_tolerance,
                InputConfig::default().touch_tolerance
            );
            self.input.touch_tolerance = InputConfig::default().touch_tolerance;
        } else if !(0.0..=100.0).contains(&self.input.touch_tolerance) {
            warn!(
                "Invalid touch_tolerance {:.1}, clamping to 0.0-100.0 range",
                self.input.touch_tolerance
            );
            self.input.touch_tolerance = self.input.touch_tolerance.clamp(0.0, 100.0);
        }

        if self.frame.inset > 1000 {
            warn!(
                "Invalid frame inset {}, clamping to 0-1000 range",
                self.frame.inset
            );
            self.frame.inset = 1000;
        }

        if !(1..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 1-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(1, 4);
        }
    }

    /// Returns the default path to the configuration file.
    ///
    /// The config file is located at `~/.config/minipaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("minipaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text).context("Invalid configuration TOML")?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Loads configuration from `path` (or the default location), falling
    /// back to defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load(path: Option<&Path>) -> Result<LoadedConfig> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(LoadedConfig {
                config: Self::default(),
                source: ConfigSource::Default,
            });
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(LoadedConfig {
            config,
            source: ConfigSource::File(config_path),
        })
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Writes the documented example config to `path` (or the default location).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Color};
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.stroke_width, 12.0);
        assert_eq!(config.input.touch_tolerance, 8.0);
        assert_eq!(config.frame.inset, 40);
        assert!(config.frame.enabled);
        assert_eq!(
            config.drawing.background_color.to_color(),
            Color::from_rgb8(255, 171, 145)
        );
    }

    #[test]
    fn named_and_rgb_colors_parse() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            background_color = [10, 20, 30]
            stroke_color = "black"
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.background_color, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(config.drawing.stroke_color.to_color(), BLACK);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            stroke_width = 0.25

            [input]
            touch_tolerance = 500.0

            [frame]
            inset = 5000

            [performance]
            buffer_count = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.stroke_width, 1.0);
        assert_eq!(config.input.touch_tolerance, 100.0);
        assert_eq!(config.frame.inset, 1000);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[drawing\nstroke_width = ").is_err());
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_toml_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.frame.inset, 40);
    }

    #[test]
    fn load_missing_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(loaded.source, ConfigSource::Default);
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let written = Config::create_default_file(Some(&path)).unwrap();
        assert_eq!(written, path);

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.source, ConfigSource::File(path.clone()));

        assert!(Config::create_default_file(Some(&path)).is_err());
    }

    #[test]
    fn serialized_config_round_trips_through_toml() {
        let text = Config::default().to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&text).unwrap();
        assert_eq!(parsed.drawing.stroke_color, Config::default().drawing.stroke_color);
    }
}
