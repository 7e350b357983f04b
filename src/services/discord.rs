//! Discord channel delivery through the bot REST API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::services::error::NotifyError;
use crate::services::notifier::NotificationSink;

pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com";

/// Discord rejects message content longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

pub struct DiscordSink {
    api_base: String,
    bot_token: String,
    client: Client,
}

#[derive(Serialize)]
struct CreateMessage<'a> {
    content: &'a str,
}

impl DiscordSink {
    pub fn with_client(
        api_base: impl Into<String>,
        bot_token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            client,
        }
    }

    fn messages_url(&self, channel_id: &str) -> String {
        format!("{}/api/v10/channels/{}/messages", self.api_base, channel_id)
    }
}

fn truncate_content(text: &str) -> &str {
    match text.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl NotificationSink for DiscordSink {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        let payload = CreateMessage {
            content: truncate_content(text),
        };

        let response = self
            .client
            .post(self.messages_url(destination))
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.bot_token),
            )
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(NotifyError::Platform(format!(
                "Discord API error {}: {}",
                status, error_text
            )));
        }

        debug!(channel_id = %destination, "DiscordSink: message delivered to channel {}", destination);
        Ok(())
    }
}
