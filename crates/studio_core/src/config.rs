//! Studio startup configuration, read from `studio_config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::DEFAULT_RESOURCE_PATH;
use crate::viz::{VisualizationFlags, GROUP_COUNT};

pub const CONFIG_FILE_NAME: &str = "studio_config.json";
pub const CONFIG_FILE_VERSION: u32 = 1;
pub const MAX_LOAD_LATENCY_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    pub version: u32,
    pub default_model: String,
    pub initial_groups: [bool; GROUP_COUNT],
    pub explorer_open: bool,
    pub inspector_open: bool,
    /// Re-selecting the loaded model triggers a fresh load instead of a no-op.
    pub reload_on_reselect: bool,
    /// Statistics manifest to load models from instead of the bundled one.
    pub stats_manifest: Option<PathBuf>,
    pub load_latency_ms: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FILE_VERSION,
            default_model: DEFAULT_RESOURCE_PATH.to_string(),
            initial_groups: VisualizationFlags::default().groups(),
            explorer_open: false,
            inspector_open: true,
            reload_on_reselect: false,
            stats_manifest: None,
            load_latency_ms: 0,
        }
    }
}

impl StudioConfig {
    pub fn initial_flags(&self) -> VisualizationFlags {
        VisualizationFlags::from_groups(self.initial_groups)
    }

    fn normalize(mut self) -> Self {
        let trimmed = self.default_model.trim();
        if trimmed.is_empty() {
            self.default_model = DEFAULT_RESOURCE_PATH.to_string();
        } else if trimmed.len() != self.default_model.len() {
            self.default_model = trimmed.to_string();
        }
        self.load_latency_ms = self.load_latency_ms.min(MAX_LOAD_LATENCY_MS);
        self
    }
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir().map_err(|error| {
        ConfigError::Io(format!("failed to read current directory: {error}"))
    })?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}

/// Reads the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<StudioConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no config at '{}', using defaults", path.display());
            return Ok(StudioConfig::default());
        }
        Err(error) => {
            return Err(ConfigError::Io(format!(
                "failed to read config file '{}': {error}",
                path.display()
            )))
        }
    };

    let config: StudioConfig = serde_json::from_str(&contents).map_err(|error| {
        ConfigError::InvalidFormat(format!(
            "invalid config file '{}': {error}",
            path.display()
        ))
    })?;

    if config.version != CONFIG_FILE_VERSION {
        return Err(ConfigError::InvalidFormat(format!(
            "unsupported config file version {} in '{}'",
            config.version,
            path.display()
        )));
    }

    log::info!("loaded config from '{}'", path.display());
    Ok(config.normalize())
}
