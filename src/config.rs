use tracing::debug;

/// Process-wide configuration, loaded once at startup and passed by
/// reference into the pipeline stages that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl Config {
    /// Read configuration from the environment, honoring a `.env` file in
    /// the working directory if one exists. Empty values count as absent.
    ///
    /// The Gemini key is not checked here; a missing key fails at the
    /// first API call. Only the Telegram credentials are guarded, and
    /// that happens in the publisher.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            telegram_bot_token: non_empty_var("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: non_empty_var("TELEGRAM_CHAT_ID"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            debug!("{name} is not set");
            None
        }
    }
}
