//! CLI configuration
//!
//! Layered configuration: serde defaults, then the TOML config file, then
//! `MPD_CLI_*` environment variables, then the `MPD_HOST`/`MPD_PORT`
//! variables honored for `mpc` compatibility.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mpd_client_core::ClientConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub connection: ClientConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub color_enabled: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

/// Configuration manager handling XDG-compliant paths and layered loading
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with the default XDG-compliant path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("mpdc/config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mpdc/config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        figment = figment.merge(Env::prefixed("MPD_CLI_").split("__"));

        let mut config: AppConfig = figment.extract().context("Failed to load configuration")?;

        // mpc compatibility: MPD_HOST and MPD_PORT override everything
        if let Ok(host) = std::env::var("MPD_HOST") {
            // mpc encodes a password as "password@host"
            match host.split_once('@') {
                Some((password, host)) if !password.is_empty() => {
                    config.connection.password = Some(password.to_string());
                    config.connection.host = host.to_string();
                }
                _ => config.connection.host = host,
            }
        }
        if let Ok(port) = std::env::var("MPD_PORT") {
            config.connection.port = port
                .parse()
                .with_context(|| format!("Invalid MPD_PORT value: {port}"))?;
        }

        Ok(config)
    }

    /// Write the current effective configuration to the config file
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let config = self.load()?;
        let content = toml::to_string_pretty(&config)?;
        fs::write(&self.config_path, content)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        Ok(())
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut current = &value;
        for part in key.split('.') {
            match current {
                toml::Value::Table(table) => {
                    current = table
                        .get(part)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' not found", key))?;
                }
                _ => anyhow::bail!("Invalid key path: {}", key),
            }
        }

        match current {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => anyhow::bail!("Value at '{}' is not a simple type", key),
        }
    }
}

/// Load the effective client connection settings
pub fn get_client_config() -> Result<ClientConfig> {
    Ok(ConfigManager::new().load()?.connection)
}
