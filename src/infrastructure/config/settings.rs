//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Settings come from an optional TOML file; credentials always come from the
//! environment (`TELEGRAM_TOKEN`, `COINGECKO_API_KEY`).
//!
//! # Example
//!
//! ```no_run
//! use tokenwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::credentials::Credentials;
use super::logging::LoggingConfig;
use super::poll::PollConfig;
use super::price_api::PriceApiConfig;
use super::telegram::TelegramAppConfig;
use crate::error::{ConfigError, Result};

/// Config file picked up when no path is given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Poll loop timing and failure reporting.
    #[serde(default)]
    pub poll: PollConfig,

    /// Price API endpoint and timeouts.
    #[serde(default)]
    pub price_api: PriceApiConfig,

    /// Telegram bot behaviour.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Credentials loaded from the environment at runtime.
    #[serde(skip)]
    pub credentials: Credentials,
}

impl Config {
    /// Parse configuration from TOML content, reading credentials from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, validation fails, or a
    /// credential is missing.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config = Self::parse_settings(content)?;
        config.credentials = Credentials::from_env()?;
        Ok(config)
    }

    /// Parse configuration from TOML content with explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml_with_credentials(content: &str, credentials: Credentials) -> Result<Self> {
        let mut config = Self::parse_settings(content)?;
        config.credentials = credentials;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    /// - A credential is missing from the environment
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_PATH`] if it
    /// exists, else use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Self::parse_toml(""),
        }
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn parse_settings(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.price_api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        validate_url("base_url", &self.price_api.base_url)?;
        validate_url("chart_base_url", &self.price_api.chart_base_url)?;
        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme `{}`", url.scheme()),
        }
        .into());
    }
    Ok(())
}
