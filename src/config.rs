use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::suggestions::DEFAULT_SUGGESTION_LIMIT;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// URL or file path of the doctor list
    #[serde(default)]
    pub source: Option<String>,
    /// Page address the shareable link is built on
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default)]
    pub vim_mode: bool,
}

fn default_base_url() -> String {
    "http://localhost/doctors".to_string()
}

fn default_max_suggestions() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            base_url: default_base_url(),
            max_suggestions: default_max_suggestions(),
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Preferred config location: `<config_dir>/docfinder/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docfinder").join("config.yaml"))
}

/// Determine the config file path with fallback logic
///
/// 1. `--config` path (must exist)
/// 2. `<config_dir>/docfinder/config.yaml`
/// 3. `./config.yaml`
///
/// Returns `Ok(None)` when no file is found and none was requested.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_path) = default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Error for a run with neither a config file nor `--source`
pub fn missing_source_error() -> anyhow::Error {
    let expected_path = default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/docfinder/config.yaml".to_string());

    anyhow::anyhow!(
        "No doctor source configured. Either:\n\
         1. set `source:` in {} (preferred)\n\
         2. set `source:` in ./config.yaml\n\
         3. pass --source <url|path>",
        expected_path
    )
}
