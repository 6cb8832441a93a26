use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::defaults::{
    DefaultConfig, DEFAULT_API_KEY, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    ENV_API_KEY, ENV_API_URL, ENV_MODEL_NAME, ENV_TIMEOUT_SECS,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Settings {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub api_url: String,
    pub api_key: String,
    pub temperature: f64,
    /// Client-side request timeout. `None` leaves the request unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub use_colors: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub min_count: usize,
    pub max_count: usize,
    pub min_value: f64,
    pub max_value: f64,
}

/// The three values that address a chat-completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTarget {
    pub model: String,
    pub api_url: String,
    pub api_key: String,
}

/// Per-invocation replacements for a [`ModelTarget`]. Unset fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetOverrides {
    pub model: Option<String>,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
}

impl ModelTarget {
    pub fn with_overrides(&self, overrides: &TargetOverrides) -> ModelTarget {
        ModelTarget {
            model: overrides.model.clone().unwrap_or_else(|| self.model.clone()),
            api_url: overrides
                .api_url
                .clone()
                .unwrap_or_else(|| self.api_url.clone()),
            api_key: overrides
                .api_key
                .clone()
                .unwrap_or_else(|| self.api_key.clone()),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_count: 10,
            max_count: 30,
            min_value: -100.0,
            max_value: 100.0,
        }
    }
}

impl Settings {
    /// Loads the config file (if any) and layers the process environment on top.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path_static()?;
        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let settings: Settings = toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            log::debug!("Loaded settings from {}", path.display());
            Ok(settings)
        } else {
            // Return default settings if config doesn't exist
            Ok(Self::default())
        }
    }

    /// Overrides model settings from environment-style variables. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model) = get(ENV_MODEL_NAME) {
            self.model.name = model;
        }
        if let Some(url) = get(ENV_API_URL) {
            self.model.api_url = url;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.model.api_key = key;
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.model.timeout_secs = Some(secs),
                Err(e) => log::warn!("Ignoring {ENV_TIMEOUT_SECS}={raw}: {e}"),
            }
        }
    }

    /// Writes the commented default config file. Returns `false` if one already exists.
    pub fn init_file(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DefaultConfig::create_default_config_file())
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(true)
    }

    pub fn get_config_path(&self) -> Result<PathBuf> {
        Self::get_config_path_static()
    }

    fn get_config_path_static() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        Ok(home_dir.join(".bogo").join("config.toml"))
    }

    pub fn target(&self) -> ModelTarget {
        ModelTarget {
            model: self.model.name.clone(),
            api_url: self.model.api_url.clone(),
            api_key: self.model.api_key.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.model.timeout_secs.map(Duration::from_secs)
    }
}
