//! Price lookup port.

use async_trait::async_trait;

use crate::domain::{TokenQuote, TrackedTarget};
use crate::error::LookupError;

/// Source of current token prices.
///
/// Each call is an independent attempt: no caching, no retry. The poll loop
/// treats the next tick as the retry mechanism.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Look up the current quote for a target.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if the token does not exist (or has
    /// no price) on that network, and [`LookupError::Transient`] for network
    /// failures, timeouts, rate limits and malformed responses.
    async fn fetch(&self, target: &TrackedTarget) -> Result<TokenQuote, LookupError>;
}
