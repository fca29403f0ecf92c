pub mod settings;
pub mod telegram;

pub use settings::Settings;
pub use telegram::RealTelegramApi;
