//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsdex/rsdex.toml`
//! 3. Environment variables: `RSDEX_*` prefix (e.g. `RSDEX_API__BASE_URL`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::DexResult;

/// Default PokéAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base url of the PokéAPI instance
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListConfig {
    /// Default page size for `rsdex list`
    pub page_limit: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { page_limit: 20 }
    }
}

/// Merged settings from all config layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub api: ApiConfig,
    pub list: ListConfig,
}

impl Settings {
    /// Load settings: defaults, then global config file, then `RSDEX_*` env vars.
    pub fn load() -> DexResult<Self> {
        Self::load_from(Self::global_config_path())
    }

    /// Load with an explicit global config path (tests use a temp dir).
    pub fn load_from(global: Option<PathBuf>) -> DexResult<Self> {
        let defaults = Settings::default();

        let mut builder = Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_secs", defaults.api.timeout_secs as i64)?
            .set_default("list.page_limit", defaults.list.page_limit as i64)?;

        if let Some(path) = global {
            builder = builder.add_source(File::from(path).required(false));
        }

        let cfg = builder
            .add_source(Environment::with_prefix("RSDEX").separator("__"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    /// Path of the global config file, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rsdex").map(|dirs| dirs.config_dir().join("rsdex.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout_secs, 10);
        assert_eq!(settings.list.page_limit, 20);
    }
}
