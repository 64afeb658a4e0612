//! swarmscribe settings
//!
//! Settings come from built-in defaults, optionally overridden by a YAML
//! settings file. The CLI applies its own flags on top.

pub mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use swarmscribe_core::DEFAULT_COMPOSE_VERSION;

/// Environment variable naming a settings file directly
pub const CONFIG_ENV: &str = "SWARMSCRIBE_CONFIG";

const LOCAL_CANDIDATES: [&str; 2] = ["swarmscribe.yaml", ".swarmscribe.yaml"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// docker CLI program
    pub docker: String,
    /// Prefix docker commands with `sudo`
    pub sudo: bool,
    /// Directory the Compose files are written to
    pub output_dir: PathBuf,
    /// File name prefix, followed by the stack name and `.yaml`
    pub file_prefix: String,
    /// Top-level `version` key; `None` leaves it out
    pub compose_version: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            docker: "docker".to_string(),
            sudo: true,
            output_dir: PathBuf::from("docker_compose"),
            file_prefix: "to_be_tested-".to_string(),
            compose_version: Some(DEFAULT_COMPOSE_VERSION.to_string()),
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the first discovered settings file
    ///
    /// Without any settings file the defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => find_settings_file()?,
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// An empty document yields the defaults
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Output file for a stack
    pub fn output_path(&self, stack: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}.yaml", self.file_prefix, stack))
    }
}

/// Look for a settings file
///
/// Search order:
/// 1. `SWARMSCRIBE_CONFIG` environment variable (must exist when set)
/// 2. current directory: `swarmscribe.yaml`, `.swarmscribe.yaml`
/// 3. `~/.config/swarmscribe/config.yaml`
pub fn find_settings_file() -> Result<Option<PathBuf>> {
    if let Ok(config_path) = std::env::var(CONFIG_ENV) {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::NotFound(path));
    }

    let current_dir = std::env::current_dir()?;
    for filename in &LOCAL_CANDIDATES {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join("swarmscribe").join("config.yaml");
        if global.exists() {
            return Ok(Some(global));
        }
    }

    Ok(None)
}
