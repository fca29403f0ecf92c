use thiserror::Error;

/// Failure classes for a single send attempt.
///
/// An `ok = false` answer from Telegram is not an error: the sender reports it
/// as `Ok(false)` and only transport/protocol problems end up here.
#[derive(Error, Debug)]
pub enum TgError {
    #[error("{key} not found in environment variables. Check .env file.")]
    Config { key: String },

    #[error("HTTP error sending Telegram message: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Telegram API error {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unparseable Telegram API response: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TgError>;
