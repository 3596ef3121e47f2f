//! Response types for the token endpoint.
//!
//! Numeric fields arrive as decimal strings (`"0.00001234"`), occasionally as
//! bare JSON numbers, and any of them may be `null`.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::TokenQuote;
use crate::error::LookupError;

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    data: TokenData,
    /// Side-loaded resources from `include=top_pools`, best pool first.
    #[serde(default)]
    included: Vec<IncludedResource>,
}

#[derive(Debug, Deserialize)]
struct TokenData {
    attributes: TokenAttributes,
}

#[derive(Debug, Deserialize)]
struct TokenAttributes {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    price_usd: Option<Numeric>,
    #[serde(default)]
    fdv_usd: Option<Numeric>,
}

#[derive(Debug, Deserialize)]
struct IncludedResource {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    attributes: PoolAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct PoolAttributes {
    #[serde(default)]
    price_change_percentage: Windows,
    #[serde(default)]
    volume_usd: Windows,
}

#[derive(Debug, Default, Deserialize)]
struct Windows {
    #[serde(default)]
    m5: Option<Numeric>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Text(String),
    Number(serde_json::Number),
}

impl Numeric {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Text(raw) => parse_decimal(raw),
            Self::Number(raw) => parse_decimal(&raw.to_string()),
        }
    }

    fn raw(&self) -> String {
        match self {
            Self::Text(raw) => raw.clone(),
            Self::Number(raw) => raw.to_string(),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

impl TokenResponse {
    /// Convert into a quote.
    ///
    /// A token without a USD price is reported as not found; a price that is
    /// present but unparseable is a transient failure.
    pub(super) fn into_quote(self, observed_at: DateTime<Utc>) -> Result<TokenQuote, LookupError> {
        let attributes = self.data.attributes;
        let raw_price = attributes.price_usd.ok_or(LookupError::NotFound)?;
        let price_usd = raw_price
            .to_decimal()
            .ok_or_else(|| LookupError::transient(format!("unparseable price `{}`", raw_price.raw())))?;

        let top_pool = self
            .included
            .into_iter()
            .find(|resource| resource.kind.as_deref().map_or(true, |kind| kind == "pool"))
            .map(|resource| resource.attributes)
            .unwrap_or_default();

        Ok(TokenQuote {
            name: attributes.name.filter(|name| !name.is_empty()),
            symbol: attributes.symbol.filter(|symbol| !symbol.is_empty()),
            price_usd,
            price_change_5m_pct: top_pool
                .price_change_percentage
                .m5
                .as_ref()
                .and_then(Numeric::to_decimal),
            fdv_usd: attributes.fdv_usd.as_ref().and_then(Numeric::to_decimal),
            volume_5m_usd: top_pool.volume_usd.m5.as_ref().and_then(Numeric::to_decimal),
            observed_at,
        })
    }
}
