use async_trait::async_trait;

use crate::errors::Result;

/// `TelegramApi` defines an interface for sending messages via the Telegram Bot API.
///
/// This trait allows different implementations, including mock implementations for testing
/// and real ones that send actual HTTP requests.
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Sends a text message to a specified Telegram chat.
    ///
    /// Returns `Ok(true)` when Telegram confirmed delivery and `Ok(false)`
    /// when the API answered with `ok = false`.
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<bool>;
}
