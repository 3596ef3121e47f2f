use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokenwatch::domain::ChatKey;
use tokenwatch::error::{Error, Result};
use tokenwatch::port::{ChatTransport, Notice};

/// Thread-safe notice collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<(ChatKey, Notice)>>>,
    failing: Arc<Mutex<Vec<ChatKey>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every delivery to `chat` fail.
    pub fn fail_for(&self, chat: ChatKey) {
        self.failing.lock().push(chat);
    }

    pub fn sent(&self) -> Vec<(ChatKey, Notice)> {
        self.sent.lock().clone()
    }

    pub fn sent_to(&self, chat: ChatKey) -> Vec<Notice> {
        self.sent
            .lock()
            .iter()
            .filter(|(to, _)| *to == chat)
            .map(|(_, notice)| notice.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send(&self, chat: ChatKey, notice: &Notice) -> Result<()> {
        if self.failing.lock().contains(&chat) {
            return Err(Error::Connection(format!("chat {chat} unreachable")));
        }
        self.sent.lock().push((chat, notice.clone()));
        Ok(())
    }
}
