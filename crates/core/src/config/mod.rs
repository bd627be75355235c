//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (FRIDAY_*)
//! 2. TOML config file (if FRIDAY_CONFIG_FILE set)
//! 3. Built-in defaults

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Variables read as raw text. The generic env provider would turn an
/// all-digit API key into a number, and `007` into `7`.
const VERBATIM_ENV: [(&str, &str); 2] = [("FRIDAY_API_KEY", "api_key"), ("FRIDAY_USER_AGENT", "user_agent")];

/// Default base URL of the Friday Data API.
pub const DEFAULT_BASE_URL: &str = "https://api.fridaydata.tech";

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (FRIDAY_*)
/// 2. TOML config file (if FRIDAY_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Friday Data API key, sent as `X-API-KEY` on every request.
    ///
    /// Set via FRIDAY_API_KEY environment variable. Required at startup.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the upstream API.
    ///
    /// Set via FRIDAY_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via FRIDAY_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_user_agent() -> String {
    "friday-mcp/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_key: None, base_url: default_base_url(), user_agent: default_user_agent() }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `FRIDAY_`
    /// 2. TOML file from `FRIDAY_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("FRIDAY_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("FRIDAY_")
                .ignore(&["CONFIG_FILE", "API_KEY", "USER_AGENT"])
                .map(|key| key.as_str().to_lowercase().into()),
        );

        for (var, key) in VERBATIM_ENV {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the API key, treating an empty value as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the API key is not set.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "api_key".into(),
                hint: "Set FRIDAY_API_KEY environment variable".into(),
            })
    }
}
