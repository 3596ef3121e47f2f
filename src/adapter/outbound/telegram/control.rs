//! Telegram command execution against the tracking registry.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::command::{command_help, parse_command_for, track_usage, TrackerCommand};
use crate::application::TrackingRegistry;
use crate::domain::ChatKey;

/// Executes bot commands for one chat at a time.
///
/// Each command is at most one registry call, so a command is applied
/// entirely or not at all.
#[derive(Clone)]
pub struct TrackingControl {
    registry: Arc<TrackingRegistry>,
    poll_interval: Duration,
    /// This bot's username; commands suffixed with another bot's name are ignored.
    bot_username: Option<String>,
}

impl TrackingControl {
    #[must_use]
    pub fn new(registry: Arc<TrackingRegistry>, poll_interval: Duration) -> Self {
        Self {
            registry,
            poll_interval,
            bot_username: None,
        }
    }

    /// Only answer `/command@name` when `name` is this bot.
    #[must_use]
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Process a message and return the reply, if any.
    ///
    /// Returns `None` for plain text, unknown commands and commands addressed
    /// to other bots, so the bot stays quiet in group chats. Malformed `/track`
    /// arguments produce a usage reply and leave the registry untouched.
    #[must_use]
    pub fn respond(&self, chat: ChatKey, text: &str) -> Option<String> {
        match parse_command_for(text, self.bot_username.as_deref()) {
            Ok(command) => Some(self.execute(chat, command)),
            Err(err) if err.is_argument_error() => {
                Some(format!("❌ Invalid /track arguments: {err}\n\n{}", track_usage()))
            }
            Err(_) => None,
        }
    }

    /// Execute one parsed command and return response text.
    #[must_use]
    pub fn execute(&self, chat: ChatKey, command: TrackerCommand) -> String {
        match command {
            TrackerCommand::Start | TrackerCommand::Help => command_help().to_string(),
            TrackerCommand::Track(target) => {
                let reply = format!(
                    "✅ Started tracking price for {} on {}\n\
                    Updates every {}. Use /stop to stop.",
                    target.address(),
                    target.network(),
                    format_interval(self.poll_interval)
                );
                info!(
                    chat_id = chat.get(),
                    network = target.network(),
                    address = target.address(),
                    "Tracking started"
                );
                self.registry.set(chat, target);
                reply
            }
            TrackerCommand::Stop => match self.registry.clear(chat) {
                Some(target) => {
                    info!(chat_id = chat.get(), target = %target, "Tracking stopped");
                    format!("🛑 Stopped tracking {target}")
                }
                None => "🛑 Tracking is off. No token was being tracked in this chat.".to_string(),
            },
        }
    }
}

fn format_interval(interval: Duration) -> String {
    let secs = interval.as_secs();
    match secs {
        60 => "minute".to_string(),
        s if s >= 120 && s % 60 == 0 => format!("{} minutes", s / 60),
        1 => "second".to_string(),
        s => format!("{s} seconds"),
    }
}
