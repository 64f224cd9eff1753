//! Analysis configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempcast_aggregate::OpenPolicy;
use tempcast_types::Granularity;
use thiserror::Error;

use crate::Model;

/// Errors that can occur while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a config file.
    #[error("Failed to write config file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse config file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize JSON.
    #[error("Failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// Moving-average window of zero.
    #[error("Moving average window must be positive")]
    ZeroWindow,

    /// Evaluation threshold of zero.
    #[error("Minimum bars for evaluation must be positive")]
    ZeroEvaluationThreshold,
}

/// Options for a full analysis pass.
///
/// Missing fields in a JSON file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Aggregation timeframe.
    pub granularity: Granularity,
    /// Moving-average window.
    pub moving_average_window: usize,
    /// How each bar's open is chosen.
    pub open_policy: OpenPolicy,
    /// Whether to run forward-chaining validation.
    pub show_validation: bool,
    /// Whether to compute rolling predictions.
    pub show_rolling: bool,
    /// Bars required before validation and rolling predictions run.
    pub min_bars_for_evaluation: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Yearly,
            moving_average_window: Model::DEFAULT_WINDOW,
            open_policy: OpenPolicy::FirstReading,
            show_validation: true,
            show_rolling: true,
            min_bars_for_evaluation: 4,
        }
    }
}

impl AnalysisConfig {
    /// Sets the aggregation granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Sets the moving-average window.
    #[must_use]
    pub const fn with_window(mut self, window: usize) -> Self {
        self.moving_average_window = window;
        self
    }

    /// Sets the open policy.
    #[must_use]
    pub const fn with_open_policy(mut self, policy: OpenPolicy) -> Self {
        self.open_policy = policy;
        self
    }

    /// Enables or disables validation.
    #[must_use]
    pub const fn with_validation(mut self, enabled: bool) -> Self {
        self.show_validation = enabled;
        self
    }

    /// Enables or disables rolling predictions.
    #[must_use]
    pub const fn with_rolling(mut self, enabled: bool) -> Self {
        self.show_rolling = enabled;
        self
    }

    /// Sets the bar count required for validation and rolling predictions.
    #[must_use]
    pub const fn with_min_bars_for_evaluation(mut self, min_bars: usize) -> Self {
        self.min_bars_for_evaluation = min_bars;
        self
    }

    /// Checks the configuration for values no analysis can use.
    ///
    /// # Errors
    ///
    /// Returns an error if the window or evaluation threshold is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.moving_average_window == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        if self.min_bars_for_evaluation == 0 {
            return Err(ConfigError::ZeroEvaluationThreshold);
        }
        Ok(())
    }

    /// Returns true if `bar_count` bars are enough for validation and
    /// rolling predictions.
    #[must_use]
    pub const fn evaluates(&self, bar_count: usize) -> bool {
        bar_count >= self.min_bars_for_evaluation
    }

    /// Loads and validates a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// loaded values are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();

        assert_eq!(config.granularity, Granularity::Yearly);
        assert_eq!(config.moving_average_window, 3);
        assert_eq!(config.open_policy, OpenPolicy::FirstReading);
        assert!(config.show_validation);
        assert!(config.show_rolling);
        assert!(config.validate().is_ok());
        assert!(config.evaluates(4));
        assert!(!config.evaluates(3));
    }

    #[test]
    fn test_builder() {
        let config = AnalysisConfig::default()
            .with_granularity(Granularity::Monthly)
            .with_window(5)
            .with_validation(false)
            .with_min_bars_for_evaluation(10);

        assert_eq!(config.granularity, Granularity::Monthly);
        assert_eq!(config.moving_average_window, 5);
        assert!(!config.show_validation);
        assert!(!config.evaluates(9));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            AnalysisConfig::default().with_window(0).validate(),
            Err(ConfigError::ZeroWindow)
        ));
        assert!(matches!(
            AnalysisConfig::default()
                .with_min_bars_for_evaluation(0)
                .validate(),
            Err(ConfigError::ZeroEvaluationThreshold)
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"granularity": "monthly", "moving_average_window": 6}}"#).unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.granularity, Granularity::Monthly);
        assert_eq!(config.moving_average_window, 6);
        assert_eq!(config.min_bars_for_evaluation, 4);
    }

    #[test]
    fn test_json_file_is_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"moving_average_window": 0}}"#).unwrap();

        assert!(matches!(
            AnalysisConfig::from_json_file(file.path()),
            Err(ConfigError::ZeroWindow)
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AnalysisConfig::default().with_open_policy(OpenPolicy::GroupMean);

        config.save(&path).unwrap();
        assert_eq!(AnalysisConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let result = AnalysisConfig::from_json_file("/nonexistent/tempcast.json");
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
