//! The (network, contract address) pair a chat monitors.

use std::fmt;

/// A token contract on a specific network.
///
/// Immutable once created. A new `/track` replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackedTarget {
    network: String,
    address: String,
}

impl TrackedTarget {
    /// Create a target.
    ///
    /// The network id is trimmed and lower-cased since the price API uses
    /// lower-case slugs (`eth`, `solana`, `bsc`). The address is only trimmed:
    /// some chains treat address case as significant.
    pub fn new(network: impl AsRef<str>, address: impl AsRef<str>) -> Self {
        Self {
            network: network.as_ref().trim().to_ascii_lowercase(),
            address: address.as_ref().trim().to_string(),
        }
    }

    /// Network id as understood by the price API.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Token contract address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for TrackedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.address, self.network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_is_normalized_address_is_not() {
        let target = TrackedTarget::new("  Solana ", " So1anaMintAbC ");
        assert_eq!(target.network(), "solana");
        assert_eq!(target.address(), "So1anaMintAbC");
    }

    #[test]
    fn display_reads_address_on_network() {
        let target = TrackedTarget::new("eth", "0xABC");
        assert_eq!(target.to_string(), "0xABC on eth");
    }
}
