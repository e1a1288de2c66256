//! Configuration file support for series-heatmap.
//!
//! This module loads and saves the default viewing cadence from a TOML
//! configuration file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// User configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default hours watched per day in the binge calculator
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    /// Default days watched per week in the binge calculator
    #[serde(default = "default_days_per_week")]
    pub days_per_week: f64,

    /// Mark each season's best and worst episode in the heatmap
    #[serde(default)]
    pub show_highlights: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_hours_per_day() -> f64 {
    2.0
}

fn default_days_per_week() -> f64 {
    7.0
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            days_per_week: default_days_per_week(),
            show_highlights: false,
        }
    }

    /// Get the path to the config file.
    ///
    /// Returns ~/.config/series-heatmap/config.toml on Linux,
    /// or a platform-appropriate location on other systems.
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?
            .join("series-heatmap");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;

        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Create a default config file if one doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn create_default_if_missing() -> Result<PathBuf> {
        let path = Self::get_config_path()?;

        if !path.exists() {
            let config = Self::new();
            config.save()?;
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_has_defaults() {
        let config = Config::new();
        assert_eq!(config.hours_per_day, 2.0);
        assert_eq!(config.days_per_week, 7.0);
        assert!(!config.show_highlights);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            hours_per_day: 1.5,
            days_per_week: 5.0,
            show_highlights: true,
        };

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("hours_per_day = 1.5"));
        assert!(toml_str.contains("days_per_week = 5.0"));
        assert!(toml_str.contains("show_highlights = true"));
    }

    #[test]
    fn test_config_partial_deserialization() {
        // Only specify some fields, rest should use defaults
        let toml_str = r#"
            days_per_week = 3.0
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.days_per_week, 3.0);
        assert_eq!(config.hours_per_day, 2.0); // default
        assert!(!config.show_highlights); // default
    }

    #[test]
    fn test_default_config() {
        assert_eq!(Config::default(), Config::new());
    }
}
