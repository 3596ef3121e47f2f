//! Chat delivery port.

use async_trait::async_trait;

use crate::domain::{ChatKey, TokenQuote, TrackedTarget};
use crate::error::{LookupError, Result};

/// Outcome of one lookup, addressed to one chat.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A current quote.
    Quote {
        target: TrackedTarget,
        quote: TokenQuote,
    },
    /// The price API does not know the token on that network.
    NotFound { target: TrackedTarget },
    /// The lookup failed this tick.
    LookupFailed {
        target: TrackedTarget,
        reason: String,
    },
}

impl Notice {
    /// Build the notice for a lookup result.
    ///
    /// Returns `None` for a transient failure when failure notices are
    /// disabled.
    #[must_use]
    pub fn from_lookup(
        target: TrackedTarget,
        result: std::result::Result<TokenQuote, LookupError>,
        notify_failures: bool,
    ) -> Option<Self> {
        match result {
            Ok(quote) => Some(Self::Quote { target, quote }),
            Err(LookupError::NotFound) => Some(Self::NotFound { target }),
            Err(LookupError::Transient(reason)) if notify_failures => {
                Some(Self::LookupFailed { target, reason })
            }
            Err(LookupError::Transient(_)) => None,
        }
    }

    /// The target this notice is about.
    #[must_use]
    pub fn target(&self) -> &TrackedTarget {
        match self {
            Self::Quote { target, .. }
            | Self::NotFound { target }
            | Self::LookupFailed { target, .. } => target,
        }
    }
}

/// Delivers notices to chats.
///
/// Implementations render the notice in whatever markup the platform
/// supports.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver a notice to a chat.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform rejects or fails the delivery.
    async fn send(&self, chat: ChatKey, notice: &Notice) -> Result<()>;
}
