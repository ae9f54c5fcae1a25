//! Configuration file support for the overlay renderer.
//!
//! Every field has a default, so a config file only needs to name the
//! settings it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{self, overlay};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error while reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting is outside its valid range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// Version newer than this build understands
    #[error("Unsupported config version: {found}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
    },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Padding added on each side of a thumbnail crop, as a fraction of the box size
    #[serde(default = "default_pad_ratio")]
    pub pad_ratio: f64,

    /// Edge length of the loading placeholder (px)
    #[serde(default = "default_placeholder_size")]
    pub placeholder_size: u32,

    /// Box border width (px)
    #[serde(default = "default_border_width")]
    pub border_width: f64,

    /// Box border width in thumbnail mode (px)
    #[serde(default = "default_thumbnail_border_width")]
    pub thumbnail_border_width: f64,

    /// Box fill opacity
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// Box fill opacity in thumbnail mode
    #[serde(default = "default_thumbnail_fill_opacity")]
    pub thumbnail_fill_opacity: f64,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_pad_ratio() -> f64 {
    constants::DEFAULT_PAD_RATIO
}

fn default_placeholder_size() -> u32 {
    constants::DEFAULT_PLACEHOLDER_SIZE
}

fn default_border_width() -> f64 {
    overlay::BORDER_WIDTH
}

fn default_thumbnail_border_width() -> f64 {
    overlay::THUMBNAIL_BORDER_WIDTH
}

fn default_fill_opacity() -> f64 {
    overlay::FILL_OPACITY
}

fn default_thumbnail_fill_opacity() -> f64 {
    overlay::THUMBNAIL_FILL_OPACITY
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            pad_ratio: default_pad_ratio(),
            placeholder_size: default_placeholder_size(),
            border_width: default_border_width(),
            thumbnail_border_width: default_thumbnail_border_width(),
            fill_opacity: default_fill_opacity(),
            thumbnail_fill_opacity: default_thumbnail_fill_opacity(),
            log_level: LogLevel::default(),
        }
    }
}

impl RendererConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading renderer config from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version > CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
            });
        }
        if !(self.pad_ratio.is_finite() && self.pad_ratio >= 0.0) {
            return Err(ConfigError::invalid_value(
                "pad_ratio",
                "must be a non-negative number",
            ));
        }
        for (field, opacity) in [
            ("fill_opacity", self.fill_opacity),
            ("thumbnail_fill_opacity", self.thumbnail_fill_opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ConfigError::invalid_value(field, "must be within 0..=1"));
            }
        }
        for (field, width) in [
            ("border_width", self.border_width),
            ("thumbnail_border_width", self.thumbnail_border_width),
        ] {
            if !(width.is_finite() && width >= 0.0) {
                return Err(ConfigError::invalid_value(field, "must be non-negative"));
            }
        }
        Ok(())
    }

    /// Border width for the given mode.
    pub fn border_width(&self, thumbnail: bool) -> f64 {
        if thumbnail {
            self.thumbnail_border_width
        } else {
            self.border_width
        }
    }

    /// Fill opacity for the given mode.
    pub fn fill_opacity(&self, thumbnail: bool) -> f64 {
        if thumbnail {
            self.thumbnail_fill_opacity
        } else {
            self.fill_opacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = RendererConfig::from_json("{}").unwrap();
        assert_eq!(config, RendererConfig::default());
        assert_eq!(config.pad_ratio, 0.2);
        assert_eq!(config.placeholder_size, 200);
    }

    #[test]
    fn test_partial_override() {
        let config =
            RendererConfig::from_json(r#"{"pad_ratio": 0.5, "log_level": "debug"}"#).unwrap();

        assert_eq!(config.pad_ratio, 0.5);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.border_width, 2.0);
    }

    #[test]
    fn test_negative_pad_ratio_rejected() {
        let err = RendererConfig::from_json(r#"{"pad_ratio": -0.1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "pad_ratio"));
    }

    #[test]
    fn test_opacity_out_of_range_rejected() {
        assert!(RendererConfig::from_json(r#"{"thumbnail_fill_opacity": 1.5}"#).is_err());
    }

    #[test]
    fn test_future_version_rejected() {
        let err = RendererConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 99 }));
    }

    #[test]
    fn test_mode_specific_styling() {
        let config = RendererConfig::default();

        assert_eq!(config.border_width(true), 0.5);
        assert_eq!(config.border_width(false), 2.0);
        assert_eq!(config.fill_opacity(true), 0.1);
        assert_eq!(config.fill_opacity(false), 0.2);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RendererConfig::load(Path::new("/nonexistent/overlay.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
