use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tipsplit.json";

/// User-tunable settings for the tip form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tip percentages offered as quick-select buttons, in display order.
    pub presets: Vec<f64>,
    /// Party size filled in at startup and after a reset.
    pub default_party_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            presets: vec![5.0, 10.0, 15.0, 25.0, 50.0],
            default_party_size: 1,
        }
    }
}

impl Settings {
    /// Checks the invariants the form relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.presets.is_empty() {
            return Err(ConfigError::NoPresets);
        }
        if let Some(&bad) = self.presets.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(ConfigError::InvalidPreset(bad));
        }
        if self.default_party_size == 0 {
            return Err(ConfigError::InvalidPartySize);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no tip presets configured")]
    NoPresets,
    #[error("tip preset {0} must be a finite, non-negative percentage")]
    InvalidPreset(f64),
    #[error("default party size must be at least 1")]
    InvalidPartySize,
}

pub struct ConfigRepository;

impl ConfigRepository {
    /// Reads and validates settings from a JSON file.
    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings: Settings = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        info!(path = %path.display(), presets = ?settings.presets, "loaded settings");
        Ok(settings)
    }

    /// Like [`ConfigRepository::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Settings, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Settings::default())
            }
            other => other,
        }
    }
}
