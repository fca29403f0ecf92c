pub mod errors;
pub mod services;
pub mod traits;

use std::time::Duration;

use crate::errors::Result;
use crate::services::settings::Settings;
use crate::services::telegram::RealTelegramApi;
use crate::traits::telegram_api::TelegramApi;

/// High-level entrypoint: init logging, resolve settings, send one message.
///
/// Returns the delivery flag from the Telegram API (`ok` field). Settings are
/// resolved before the sender is built, so a missing API key fails here
/// without any network activity.
pub async fn run_send(chat_id: &str, text: &str, timeout_secs: u64) -> Result<bool> {
    // Initialize structured logging (default to warn if RUST_LOG not set);
    // logs go to stderr so the success path stays silent on stdout.
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    let settings = Settings::from_env()?;
    let api = RealTelegramApi::from_settings(&settings, Duration::from_secs(timeout_secs));
    api.send_message(chat_id, text).await
}
