use crate::path::{PathParamOptions, DEFAULT_SCHEME, PLACEHOLDER_MARKER};
use crate::{ParamError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured default scheme.
pub const DEFAULT_SCHEME_ENV: &str = "PARAM_EDIT_DEFAULT_SCHEME";

/// User configuration for parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamEditConfig {
    /// Scheme prefix for URLs typed without `http://` or `https://`
    pub default_scheme: String,
    /// Character that marks a path placeholder
    pub placeholder_marker: char,
}

impl Default for ParamEditConfig {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            placeholder_marker: PLACEHOLDER_MARKER,
        }
    }
}

impl ParamEditConfig {
    /// Extraction options described by this config.
    pub fn path_options(&self) -> PathParamOptions {
        PathParamOptions {
            default_scheme: self.default_scheme.clone(),
            marker: self.placeholder_marker,
        }
    }

    /// Apply overrides from the environment.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(scheme) = env::var(DEFAULT_SCHEME_ENV) {
            if !scheme.is_empty() {
                log::debug!("Default scheme overridden from {DEFAULT_SCHEME_ENV}: {scheme}");
                self.default_scheme = scheme;
            }
        }
        self
    }

    /// Serialize config to a pretty JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize config from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Config file handling in the XDG config directory.
///
/// The config lives at `~/.config/param-edit/config.json`.
pub struct ConfigStore;

impl ConfigStore {
    /// Get the config file path using XDG directories.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ParamError::Config("Cannot determine XDG config directory".to_string()))?;

        Ok(config_dir.join("param-edit").join("config.json"))
    }

    /// Load the config, falling back to defaults when no file exists.
    ///
    /// Environment overrides are applied on top of the file.
    pub fn load() -> Result<ParamEditConfig> {
        let config = match Self::config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(e) => {
                log::warn!("{e}, using default config");
                ParamEditConfig::default()
            }
        };
        Ok(config.with_env_overrides())
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<ParamEditConfig> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(ParamEditConfig::default());
        }

        let json = fs::read_to_string(path)?;
        let config = ParamEditConfig::from_json(&json).map_err(|e| {
            ParamError::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;

        log::debug!("Config loaded from: {}", path.display());
        Ok(config)
    }

    /// Save the config to the XDG config directory.
    pub fn save(config: &ParamEditConfig) -> Result<PathBuf> {
        let path = Self::config_path()?;
        Self::save_to(config, &path)?;
        Ok(path)
    }

    /// Save the config to an explicit path, creating parent directories.
    pub fn save_to(config: &ParamEditConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, config.to_json()?)?;

        log::debug!("Config saved to: {}", path.display());
        Ok(())
    }
}
