use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::TelegramConfig;
use crate::platform::MessageSink;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    text: &'a str,
    chat_id: &'a str,
}

/// Posts messages to a Telegram chat through the Bot API sendMessage webhook
pub struct TelegramNotifier {
    client: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self {
            client,
            url: config.send_message_url(),
            chat_id: config.chat_id.clone(),
        }
    }
}

#[async_trait]
impl MessageSink for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let request = SendMessageRequest {
            text,
            chat_id: &self.chat_id,
        };

        debug!("Sending message to chat {}", self.chat_id);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context("Failed to send message to Telegram")?;

        let status = response.status();
        if !status.is_success() {
            warn!("Telegram responded {}", status);
            anyhow::bail!("Telegram API error ({})", status);
        }

        info!("Telegram responded {}", status);
        Ok(())
    }
}
