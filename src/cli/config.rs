//! Configuration management for classpredict
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.classpredict/config.toml

use crate::chart::ChartOptions;
use crate::errors::{PredictorError, Result};
use crate::types::CompletionModel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration for classpredict
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Terminal rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_chart: bool,
    pub chart_height: usize,
    pub chart_width: usize,
}

/// Form defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Model offered as the default choice in the first step
    pub model: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_chart: true,
            chart_height: 10,
            chart_width: 60,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PredictorError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| PredictorError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".classpredict").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(2..=40).contains(&self.display.chart_height) {
            return Err(PredictorError::ConfigError(
                "chart_height must be between 2 and 40".to_string(),
            ));
        }

        if !(10..=200).contains(&self.display.chart_width) {
            return Err(PredictorError::ConfigError(
                "chart_width must be between 10 and 200".to_string(),
            ));
        }

        if let Some(model) = &self.defaults.model {
            model.parse::<CompletionModel>().map_err(|_| {
                PredictorError::ConfigError(format!("Invalid default model: {}", model))
            })?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PredictorError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PredictorError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Pretty TOML rendering of the configuration
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PredictorError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Default model, if one is configured
    pub fn default_model(&self) -> Option<CompletionModel> {
        self.defaults.model.as_deref().and_then(|m| m.parse().ok())
    }

    /// Chart options derived from the display section
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            height: self.display.chart_height,
            max_width: self.display.chart_width,
            color: self.display.color_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.color_output);
        assert!(config.display.show_chart);
        assert_eq!(config.display.chart_height, 10);
        assert_eq!(config.display.chart_width, 60);
        assert!(config.defaults.model.is_none());
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_height() {
        let mut config = Config::default();
        config.display.chart_height = 1;
        assert!(config.validate().is_err());
        config.display.chart_height = 41;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_width() {
        let mut config = Config::default();
        config.display.chart_width = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_model() {
        let mut config = Config::default();
        config.defaults.model = Some("cubic".to_string());
        assert!(config.validate().is_err());

        config.defaults.model = Some("sqrt".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.default_model(), Some(CompletionModel::SquareRoot));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nchart_height = 6\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.display.chart_height, 6);
        assert_eq!(config.display.chart_width, 60);
        assert!(config.defaults.model.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.color_output = false;
        config.defaults.model = Some("exponential".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "display = 3").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, PredictorError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/classpredict.toml"))).unwrap_err();
        assert!(matches!(err, PredictorError::ConfigError(_)));
    }

    #[test]
    fn test_chart_options() {
        let options = Config::default().chart_options();
        assert_eq!(options.height, 10);
        assert_eq!(options.max_width, 60);
        assert!(options.color);
    }
}
