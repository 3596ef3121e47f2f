//! HTTP client for the CoinGecko on-chain token endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;
use url::Url;

use super::dto::TokenResponse;
use crate::domain::{TokenQuote, TrackedTarget};
use crate::error::{ConfigError, LookupError, Result};
use crate::port::PriceSource;

/// CoinGecko Pro API base URL.
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-cg-pro-api-key";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// CoinGecko on-chain price client.
///
/// One request per lookup; every request is bounded by the configured
/// timeout so a hung connection cannot stall a chat's updates.
#[derive(Debug, Clone)]
pub struct CoinGecko {
    http: HttpClient,
    base_url: Url,
    api_key: String,
}

impl CoinGecko {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("`{base_url}` cannot be used as a base URL"),
            }
            .into());
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Token endpoint URL for a target, with path segments percent-encoded.
    fn token_url(&self, target: &TrackedTarget) -> std::result::Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::transient("price API base URL has no path"))?
            .pop_if_empty()
            .extend([
                "onchain",
                "networks",
                target.network(),
                "tokens",
                target.address(),
            ]);
        url.query_pairs_mut().append_pair("include", "top_pools");
        Ok(url)
    }
}

#[async_trait]
impl PriceSource for CoinGecko {
    fn name(&self) -> &'static str {
        "coingecko"
    }

    async fn fetch(&self, target: &TrackedTarget) -> std::result::Result<TokenQuote, LookupError> {
        let url = self.token_url(target)?;
        debug!(%url, "Fetching token price");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::transient("price API timed out")
                } else {
                    LookupError::transient(e.without_url())
                }
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            status if !status.is_success() => {
                return Err(LookupError::transient(format!("price API returned {status}")));
            }
            _ => {}
        }

        let body = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| LookupError::transient(format!("invalid price API response: {}", e.without_url())))?;

        body.into_quote(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use rust_decimal_macros::dec;

    const BODY: &str = r#"{
        "data": {
            "type": "token",
            "attributes": {
                "name": "Wrapped Ether",
                "symbol": "WETH",
                "price_usd": "3120.55",
                "fdv_usd": "9300000000"
            }
        },
        "included": [{
            "type": "pool",
            "attributes": {
                "price_change_percentage": { "m5": "0.42" },
                "volume_usd": { "m5": "812345.1" }
            }
        }]
    }"#;

    fn client(server: &mockito::ServerGuard) -> CoinGecko {
        CoinGecko::new(&server.url(), "test-key", Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn fetch_decodes_quote_and_sends_api_key() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/onchain/networks/eth/tokens/0xAbC")
            .match_query(Matcher::UrlEncoded("include".into(), "top_pools".into()))
            .match_header(API_KEY_HEADER, "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let quote = client(&server)
            .fetch(&TrackedTarget::new("ETH", "0xAbC"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(quote.price_usd, dec!(3120.55));
        assert_eq!(quote.display_name(), "Wrapped Ether (WETH)");
        assert_eq!(quote.price_change_5m_pct, Some(dec!(0.42)));
        assert_eq!(quote.volume_5m_usd, Some(dec!(812345.1)));
    }

    #[tokio::test]
    async fn not_found_status_maps_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/onchain/networks/eth/tokens/0xdead")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"errors":[{"status":"404","title":"Not Found"}]}"#)
            .create_async()
            .await;

        let result = client(&server)
            .fetch(&TrackedTarget::new("eth", "0xdead"))
            .await;
        assert_eq!(result, Err(LookupError::NotFound));
    }

    #[tokio::test]
    async fn rate_limit_and_server_errors_are_transient() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/onchain/networks/eth/tokens/0x429")
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;
        server
            .mock("GET", "/onchain/networks/eth/tokens/0x500")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = client(&server);
        match client.fetch(&TrackedTarget::new("eth", "0x429")).await {
            Err(LookupError::Transient(reason)) => assert!(reason.contains("429"), "{reason}"),
            other => panic!("expected transient error, got {other:?}"),
        }
        match client.fetch(&TrackedTarget::new("eth", "0x500")).await {
            Err(LookupError::Transient(reason)) => assert!(reason.contains("500"), "{reason}"),
            other => panic!("expected transient error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_transient() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/onchain/networks/eth/tokens/0xabc")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let result = client(&server)
            .fetch(&TrackedTarget::new("eth", "0xabc"))
            .await;
        assert!(matches!(result, Err(LookupError::Transient(_))));
    }

    #[test]
    fn token_url_keeps_base_path_and_encodes_segments() {
        let client = CoinGecko::new(
            "https://pro-api.coingecko.com/api/v3/",
            "key",
            Duration::from_secs(10),
        )
        .unwrap();

        let url = client
            .token_url(&TrackedTarget::new("solana", "Mint/with space"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://pro-api.coingecko.com/api/v3/onchain/networks/solana/tokens/Mint%2Fwith%20space?include=top_pools"
        );
    }

    #[test]
    fn rejects_non_base_url() {
        let result = CoinGecko::new("mailto:someone@example.com", "key", Duration::from_secs(1));
        assert!(result.is_err());
    }
}
