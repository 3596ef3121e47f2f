//! Telegram bot configuration.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram bot configuration. The bot token comes from `TELEGRAM_TOKEN`.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Publish the command list to the Telegram "/" menu at startup.
    #[serde(default = "default_true")]
    pub register_commands: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            register_commands: default_true(),
        }
    }
}
