//! Poll loop configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::application::PollSettings;

const fn default_true() -> bool {
    true
}

const fn default_interval_secs() -> u64 {
    60
}

/// Poll loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    /// Seconds between ticks (default: 60).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Tell the chat when a lookup fails transiently (default: true).
    #[serde(default = "default_true")]
    pub notify_lookup_failures: bool,
}

impl PollConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            notify_lookup_failures: default_true(),
        }
    }
}

impl From<&PollConfig> for PollSettings {
    fn from(config: &PollConfig) -> Self {
        Self {
            interval: config.interval(),
            notify_lookup_failures: config.notify_lookup_failures,
        }
    }
}
