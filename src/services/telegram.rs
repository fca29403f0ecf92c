use std::time::Duration;

use bon::Builder;
use reqwest::Client;
use serde::Deserialize;

use async_trait::async_trait;

use crate::errors::{Result, TgError};
use crate::services::settings::Settings;
use crate::traits::telegram_api::TelegramApi;

/// A real implementation of the `TelegramApi` trait that sends HTTP requests to the Telegram Bot API.
#[derive(Builder)]
pub struct RealTelegramApi {
    pub client: Client,
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl RealTelegramApi {
    /// Creates an instance from resolved [`Settings`] with a per-request timeout.
    pub fn from_settings(settings: &Settings, timeout: Duration) -> Self {
        Self::builder()
            .client(Client::new())
            .base_url(settings.api_base_url.clone())
            .token(settings.api_key.clone())
            .timeout(timeout)
            .build()
    }
}

#[async_trait]
impl TelegramApi for RealTelegramApi {
    /// Sends a message to a Telegram chat using the Telegram Bot API.
    ///
    /// Issues a single GET request to `{base_url}/bot{token}/sendMessage`
    /// with `chat_id` and `text` as query parameters; no retries.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<bool> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        tracing::debug!(%chat_id, text_len = text.len(), timeout = ?self.timeout, "sending Telegram message");

        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", chat_id), ("text", text)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP error sending Telegram message");
                TgError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TgError::HttpStatus { status, body });
        }

        let body = response.text().await.map_err(TgError::Transport)?;
        let reply: SendMessageResponse = serde_json::from_str(&body)?;
        if !reply.ok {
            tracing::warn!(
                description = reply.description.as_deref().unwrap_or("none"),
                "Telegram API rejected the message"
            );
        }
        Ok(reply.ok)
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    ok: bool,
    description: Option<String>,
}
