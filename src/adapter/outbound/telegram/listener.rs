//! Inbound command listener.
//!
//! Long-polls Telegram for messages and answers commands through
//! [`TrackingControl`]. Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, warn};

use super::command::bot_commands;
use super::control::TrackingControl;
use crate::domain::ChatKey;

/// Listen for commands until the dispatcher stops.
pub async fn run_command_listener(bot: Bot, control: TrackingControl, register_commands: bool) {
    // Register commands with Telegram so they appear in the "/" menu
    if register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let control = match bot.get_me().await {
        Ok(me) => match me.user.username.clone() {
            Some(username) => {
                info!(username = %username, "Telegram command listener started");
                control.with_bot_username(username)
            }
            None => {
                warn!("Bot has no username; accepting commands with any @mention");
                control
            }
        },
        Err(e) => {
            warn!(error = %e, "Failed to fetch bot identity; accepting commands with any @mention");
            control
        }
    };

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(response) = control.respond(ChatKey::new(msg.chat.id.0), text) {
                if let Err(e) = bot.send_message(msg.chat.id, response).await {
                    error!(chat_id = msg.chat.id.0, error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;

    warn!("Telegram command listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
