//! Price snapshot returned by a lookup.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Current market data for one token.
///
/// Fetched once per tick and forwarded. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenQuote {
    /// Token name, if the price API knows it.
    pub name: Option<String>,
    /// Ticker symbol, if the price API knows it.
    pub symbol: Option<String>,
    /// Price in USD.
    pub price_usd: Decimal,
    /// Price change over the last five minutes, in percent (top pool).
    pub price_change_5m_pct: Option<Decimal>,
    /// Fully diluted valuation in USD.
    pub fdv_usd: Option<Decimal>,
    /// Traded volume over the last five minutes in USD (top pool).
    pub volume_5m_usd: Option<Decimal>,
    /// When the quote was received.
    pub observed_at: DateTime<Utc>,
}

impl TokenQuote {
    /// Create a quote carrying only a price.
    #[must_use]
    pub fn new(price_usd: Decimal, observed_at: DateTime<Utc>) -> Self {
        Self {
            name: None,
            symbol: None,
            price_usd,
            price_change_5m_pct: None,
            fdv_usd: None,
            volume_5m_usd: None,
            observed_at,
        }
    }

    /// Human-readable label: `Name (SYMBOL)`, whichever parts are known.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.name.as_deref(), self.symbol.as_deref()) {
            (Some(name), Some(symbol)) => format!("{name} ({symbol})"),
            (Some(name), None) => name.to_string(),
            (None, Some(symbol)) => symbol.to_string(),
            (None, None) => "Unknown token".to_string(),
        }
    }
}
