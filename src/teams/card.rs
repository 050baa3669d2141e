//! Adaptive Card payload for Teams incoming webhooks.
//!
//! The structs here mirror the wire shape exactly; Teams rejects payloads
//! with unexpected casing or a missing `$schema`.

use serde::Serialize;

const CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const CARD_VERSION: &str = "1.4";

#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    kind: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "TextBlock",
            text: text.into(),
            weight: None,
            size: None,
            wrap: None,
        }
    }

    #[must_use]
    pub fn weight(mut self, weight: &str) -> Self {
        self.weight = Some(weight.to_string());
        self
    }

    #[must_use]
    pub fn size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    pub body: Vec<TextBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    #[serde(rename = "contentType")]
    content_type: &'static str,
    pub content: AdaptiveCard,
}

/// Top-level webhook payload: one message with one Adaptive Card attachment.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    pub attachments: Vec<Attachment>,
}

impl TeamsMessage {
    #[must_use]
    pub fn with_body(body: Vec<TextBlock>) -> Self {
        Self {
            kind: "message",
            attachments: vec![Attachment {
                content_type: CARD_CONTENT_TYPE,
                content: AdaptiveCard {
                    kind: "AdaptiveCard",
                    schema: CARD_SCHEMA,
                    version: CARD_VERSION,
                    body,
                },
            }],
        }
    }
}

/// Map a digest into a card: a bold title block and one wrapped block
/// carrying the digest text unmodified.
#[must_use]
pub fn digest_card(title: &str, digest: &str) -> TeamsMessage {
    TeamsMessage::with_body(vec![
        TextBlock::new(title).weight("Bolder").size("Large"),
        TextBlock::new(digest).wrap(true),
    ])
}
