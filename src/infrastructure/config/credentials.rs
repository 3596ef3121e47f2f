//! API credentials, read from the environment only.

use std::fmt;

use crate::error::ConfigError;

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the CoinGecko API key.
pub const PRICE_API_KEY_VAR: &str = "COINGECKO_API_KEY";

/// Secrets needed to talk to both APIs.
///
/// Never read from the config file. `Debug` output is redacted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    telegram_token: String,
    price_api_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(telegram_token: impl Into<String>, price_api_key: impl Into<String>) -> Self {
        Self {
            telegram_token: telegram_token.into(),
            price_api_key: price_api_key.into(),
        }
    }

    /// Read credentials from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first variable that
    /// is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first variable that
    /// is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |field: &'static str| {
            lookup(field)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingField { field })
        };

        Ok(Self {
            telegram_token: read(TELEGRAM_TOKEN_VAR)?,
            price_api_key: read(PRICE_API_KEY_VAR)?,
        })
    }

    #[must_use]
    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    #[must_use]
    pub fn price_api_key(&self) -> &str {
        &self.price_api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_token", &"<redacted>")
            .field("price_api_key", &"<redacted>")
            .finish()
    }
}
