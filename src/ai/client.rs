//! Anthropic Messages API client for generating the news digest.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::prompt::build_request_body;
use crate::errors::DigestError;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// One unit of a Messages API response. Only `text` blocks carry prose;
/// everything else (`tool_use`, `server_tool_use`, `web_search_tool_result`,
/// kinds added later) lands in the catch-all and is dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

/// Concatenate the text blocks of a response, in order, with no separator.
///
/// A response with no text blocks yields the empty string; that is not an
/// error condition.
#[must_use]
pub fn extract_text(blocks: &[ContentBlock]) -> String {
    let mut result = String::new();
    for block in blocks {
        if let ContentBlock::Text { text } = block {
            result.push_str(text);
        }
    }
    result
}

/// Client for the digest-generation call.
pub struct DigestClient {
    client: Client,
    api_key: String,
    model: String,
}

impl DigestClient {
    pub fn new(api_key: String, model: String) -> Result<Self, DigestError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DigestError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Issue one Messages API request with web search enabled and return the
    /// concatenated text of the response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, or a non-success
    /// status from the API (auth rejection and rate limiting included).
    /// No retry is attempted.
    pub async fn generate_digest(&self) -> Result<String, DigestError> {
        info!(model = %self.model, "Requesting digest from Anthropic");

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&build_request_body(&self.model))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(DigestError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| DigestError::Http(format!("Failed to parse Anthropic response: {e}")))?;

        let digest = extract_text(&parsed.content);
        info!(
            blocks = parsed.content.len(),
            chars = digest.len(),
            "Digest received"
        );
        Ok(digest)
    }
}
