pub mod telegram_api;

pub use telegram_api::TelegramApi;
