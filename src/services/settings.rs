use std::env;

use crate::errors::{Result, TgError};

pub const TELEGRAM_API_KEY: &str = "TELEGRAM_API_KEY";
pub const TELEGRAM_API_BASE_URL: &str = "TELEGRAM_API_BASE_URL";

const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Resolved configuration, built once at process entry and handed to the
/// sender read-only.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_base_url: String,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `TELEGRAM_API_KEY`: Telegram bot token (required)
    /// - `TELEGRAM_API_BASE_URL`: Base URL of the Telegram API
    ///   (optional, defaults to `https://api.telegram.org`)
    ///
    /// # Errors
    ///
    /// Returns an error if `TELEGRAM_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = telegram_api_key()?;
        let api_base_url =
            env_opt(TELEGRAM_API_BASE_URL).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            api_key,
            api_base_url,
        })
    }
}

/// Get Telegram API key from the environment.
pub fn telegram_api_key() -> Result<String> {
    require_env(TELEGRAM_API_KEY)
}

/// Required environment lookup; unset or blank values are a configuration error.
pub fn require_env(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TgError::Config {
            key: key.to_string(),
        }),
    }
}

/// Optional environment lookup; unset or blank values collapse to `None`.
pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
