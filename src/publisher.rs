use serde_json::json;
use tracing::{info, warn};

use crate::config::Config;
use crate::types::{DigestError, Result};

const API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Sent,
    SkippedUnconfigured,
}

/// Sends the digest to a Telegram chat via the Bot API.
pub struct Publisher {
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl Publisher {
    pub fn new(config: &Config) -> Self {
        Self {
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id.clone(),
        }
    }

    /// Send the digest as one message, HTML render mode, link previews
    /// disabled. Missing credentials skip the send with a warning instead
    /// of failing the run.
    pub async fn publish(&self, text: &str) -> Result<PublishOutcome> {
        let (Some(bot_token), Some(chat_id)) = (self.bot_token.as_deref(), self.chat_id.as_deref())
        else {
            warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID is not configured, skipping publish");
            return Ok(PublishOutcome::SkippedUnconfigured);
        };

        // The client lives only around this one send; nothing is reused
        // across runs.
        let client = reqwest::Client::new();
        let url = format!("{API_BASE}/bot{bot_token}/sendMessage");

        let resp = client
            .post(&url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
                "parse_mode": "HTML",
                "disable_web_page_preview": true,
            }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(DigestError::Api(error_text));
        }

        info!("Digest sent to Telegram");
        Ok(PublishOutcome::Sent)
    }
}
