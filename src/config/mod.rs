//! Configuration management

use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Port the web server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base address of the hotel management REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_port() -> u16 {
    8080
}

fn default_api_url() -> String {
    crate::api::DEFAULT_API_URL.to_string()
}

/// Platform config directory (e.g. `~/.config/hms-web` on Linux).
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "hms", "hms-web")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_dir().join("config"))
}

/// Load from `file_stem.{toml,yaml,json}` (optional) and the environment.
pub fn load_config_from(file_stem: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("api_url", default_api_url())?
        // Load from config file if it exists
        .add_source(::config::File::with_name(&file_stem.to_string_lossy()).required(false))
        // Override with environment variables (HMS_PORT, HMS_API_URL)
        .add_source(
            ::config::Environment::with_prefix("HMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: Config = config.try_deserialize()?;
    if let Err(e) = url::Url::parse(&config.api_url) {
        bail!("invalid api_url {:?}: {}", config.api_url, e);
    }
    Ok(config)
}
