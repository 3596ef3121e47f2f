//! Price API configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::coingecko::DEFAULT_BASE_URL;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_chart_base_url() -> String {
    "https://www.geckoterminal.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

/// CoinGecko on-chain API settings. The API key comes from `COINGECKO_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceApiConfig {
    /// API root, up to and including the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Root of the chart pages linked from quote messages.
    #[serde(default = "default_chart_base_url")]
    pub chart_base_url: String,
    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PriceApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PriceApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            chart_base_url: default_chart_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
