//! Outbound delivery through the Telegram Bot API.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, ParseMode};

use super::format::format_notice;
use crate::domain::ChatKey;
use crate::error::Result;
use crate::port::{ChatTransport, Notice};

/// Sends notices to Telegram chats.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
    /// Base URL for the chart link in quote messages.
    chart_base_url: String,
}

impl TelegramTransport {
    #[must_use]
    pub fn new(bot: Bot, chart_base_url: impl Into<String>) -> Self {
        Self {
            bot,
            chart_base_url: chart_base_url.into(),
        }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(&self, chat: ChatKey, notice: &Notice) -> Result<()> {
        let rendered = format_notice(notice, &self.chart_base_url);
        let mut request = self.bot.send_message(ChatId(chat.get()), rendered.text);
        if rendered.markdown {
            request = request
                .parse_mode(ParseMode::MarkdownV2)
                .link_preview_options(disabled_link_preview());
        }
        request.await?;
        Ok(())
    }
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
