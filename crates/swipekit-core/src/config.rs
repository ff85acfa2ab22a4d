//! Recognizer configuration and YAML persistence.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Minimum horizontal travel, in density-independent units, before a swipe counts.
pub const DEFAULT_MIN_DISTANCE: f32 = 10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// When a recognizer is allowed to report a swipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionPolicy {
    /// Every qualifying `Move`/`Up`/`Cancel` sample emits, including repeats
    /// within the same gesture.
    #[default]
    EverySample,
    /// Emit at most once between two `Down` samples.
    OncePerGesture,
}

/// Swipe recognizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Horizontal travel must strictly exceed this to count as a swipe.
    pub min_distance: f32,
    pub emission: EmissionPolicy,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            emission: EmissionPolicy::EverySample,
        }
    }
}

impl RecognizerConfig {
    /// Reject thresholds that would make classification meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_distance must be a finite non-negative number, got {}",
                self.min_distance
            )));
        }
        Ok(())
    }

    /// Load from a YAML file, falling back to defaults when the file is
    /// missing, unparsable, or holds a threshold `validate` rejects.
    pub fn load_validated(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let config: Self = load_or_default(path);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(?path, "Rejected config: {}, using defaults", e);
                Self::default()
            }
        }
    }
}

/// Default location of the swipekit config file.
pub fn default_config_path() -> PathBuf {
    let base = dirs_next::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("swipekit").join("swipekit.yaml")
}

/// Parse YAML from a string.
pub fn parse_yaml<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
    let config: T = serde_yaml::from_str(content)?;
    Ok(config)
}

/// Load a YAML configuration file from disk.
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> ConfigResult<T> {
    let content = fs::read_to_string(path)?;
    parse_yaml(&content)
}

/// Save a configuration to a YAML file, creating parent directories.
pub fn save_yaml<T: Serialize>(path: impl AsRef<Path>, config: &T) -> ConfigResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_yaml::to_string(config)?;
    fs::write(path, content)?;
    info!(?path, "Saved config");
    Ok(())
}

/// Load a config, falling back to defaults when the file is missing or invalid.
pub fn load_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> T {
    let path = path.as_ref();
    if !path.exists() {
        debug!(?path, "No config file found, using defaults");
        return T::default();
    }

    match load_yaml::<T>(path) {
        Ok(config) => {
            info!(?path, "Loaded config");
            config
        }
        Err(e) => {
            warn!(?path, "Failed to load config: {}, using defaults", e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert_eq!(config.min_distance, 10.0);
        assert_eq!(config.emission, EmissionPolicy::EverySample);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config: RecognizerConfig = parse_yaml("emission: once_per_gesture\n").unwrap();
        assert_eq!(config.emission, EmissionPolicy::OncePerGesture);
        assert_eq!(config.min_distance, DEFAULT_MIN_DISTANCE);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let negative = RecognizerConfig {
            min_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(negative.validate(), Err(ConfigError::Invalid(_))));

        let nan = RecognizerConfig {
            min_distance: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(nan.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("swipekit.yaml");
        let config = RecognizerConfig {
            min_distance: 24.0,
            emission: EmissionPolicy::OncePerGesture,
        };

        save_yaml(&path, &config).unwrap();
        let loaded: RecognizerConfig = load_yaml(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();

        let missing: RecognizerConfig = load_or_default(dir.path().join("missing.yaml"));
        assert_eq!(missing, RecognizerConfig::default());

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "min_distance: [not, a, number]\n").unwrap();
        let loaded: RecognizerConfig = load_or_default(&broken);
        assert_eq!(loaded, RecognizerConfig::default());
    }

    #[test]
    fn test_load_validated_rejects_bad_threshold() {
        let dir = tempfile::tempdir().unwrap();

        let negative = dir.path().join("negative.yaml");
        fs::write(&negative, "min_distance: -5.0\n").unwrap();
        assert_eq!(RecognizerConfig::load_validated(&negative), RecognizerConfig::default());

        let nan = dir.path().join("nan.yaml");
        fs::write(&nan, "min_distance: .nan\nemission: once_per_gesture\n").unwrap();
        assert_eq!(RecognizerConfig::load_validated(&nan), RecognizerConfig::default());

        let good = dir.path().join("good.yaml");
        fs::write(&good, "min_distance: 24.0\n").unwrap();
        assert_eq!(RecognizerConfig::load_validated(&good).min_distance, 24.0);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with("swipekit/swipekit.yaml"));
    }
}
