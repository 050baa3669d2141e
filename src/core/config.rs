use std::env;

use crate::errors::DigestError;

/// Default model when `DIGEST_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub anthropic_api_key: String,
    /// Optional at load time; the notifier refuses to run without it.
    pub teams_webhook_url: Option<String>,
    pub model: String,
}

impl AppConfig {
    /// Read configuration from the process environment, honoring a `.env`
    /// file in the working directory if present.
    pub fn from_env() -> Result<Self, DigestError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            anthropic_api_key: env::var("ANTHROPIC_API_KEY")
                .map_err(|_| DigestError::Config("ANTHROPIC_API_KEY must be set".to_string()))?,
            teams_webhook_url: env::var("TEAMS_WEBHOOK_URL").ok(),
            model: env::var("DIGEST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
