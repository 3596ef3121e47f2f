#![allow(dead_code)]

pub mod prices;
pub mod transport;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tokenwatch::domain::{ChatKey, TokenQuote, TrackedTarget};

pub fn chat(id: i64) -> ChatKey {
    ChatKey::new(id)
}

pub fn target(network: &str, address: &str) -> TrackedTarget {
    TrackedTarget::new(network, address)
}

/// Quote fixture with a fixed timestamp.
pub fn quote(price: Decimal) -> TokenQuote {
    let observed_at = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    TokenQuote {
        name: Some("Test Token".into()),
        symbol: Some("TEST".into()),
        ..TokenQuote::new(price, observed_at)
    }
}
