//! Analysis configuration loading.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tempcast_lib::AnalysisConfig;
use tracing::debug;

use crate::DataArgs;

/// Returns the default config file location.
///
/// Uses the `directories` crate to find the appropriate location:
/// - Linux: `~/.config/tempcast/config.json`
/// - macOS: `~/Library/Application Support/tempcast/config.json`
/// - Windows: `C:\Users\<User>\AppData\Roaming\tempcast\config\config.json`
pub(crate) fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tempcast").map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the analysis config.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
pub(crate) fn load(explicit: Option<&Path>) -> Result<AnalysisConfig> {
    if let Some(path) = explicit {
        return AnalysisConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    match default_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading default config");
            AnalysisConfig::from_json_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))
        }
        _ => Ok(AnalysisConfig::default()),
    }
}

/// Applies command-line overrides on top of a loaded config.
pub(crate) fn apply_overrides(base: AnalysisConfig, args: &DataArgs) -> Result<AnalysisConfig> {
    let mut config = base;
    if let Some(granularity) = args.granularity {
        config = config.with_granularity(granularity);
    }
    if let Some(window) = args.window {
        config = config.with_window(window);
    }
    if let Some(policy) = args.open_policy {
        config = config.with_open_policy(policy);
    }
    config.validate()?;
    Ok(config)
}
