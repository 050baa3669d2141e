//! Teams incoming-webhook client.

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use super::card::TeamsMessage;
use crate::core::config::AppConfig;
use crate::errors::DigestError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Teams webhooks acknowledge accepted messages with 202, not 200. Any
/// other status, other 2xx codes included, means the message was not taken.
#[must_use]
pub fn is_accepted(status: u16) -> bool {
    status == 202
}

pub struct TeamsClient {
    client: Client,
    webhook_url: String,
}

impl TeamsClient {
    pub fn new(webhook_url: String) -> Result<Self, DigestError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DigestError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Build a client from the app configuration.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error, before any network call, when
    /// `TEAMS_WEBHOOK_URL` was not set.
    pub fn from_config(config: &AppConfig) -> Result<Self, DigestError> {
        let url = config
            .teams_webhook_url
            .clone()
            .ok_or_else(|| DigestError::Config("TEAMS_WEBHOOK_URL must be set".to_string()))?;
        Self::new(url)
    }

    /// POST the card payload to the webhook.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or any status other
    /// than 202; the response body is carried in the error for diagnosis.
    /// No retry is attempted.
    pub async fn send_notification(&self, message: &TeamsMessage) -> Result<(), DigestError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !is_accepted(status) {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read response body: {e}"));
            return Err(DigestError::UnexpectedStatus { status, body });
        }

        info!("Webhook accepted the message");
        Ok(())
    }
}
