use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Anthropic API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Webhook rejected the message (status {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            DigestError::Timeout(error.to_string())
        } else {
            DigestError::Http(error.to_string())
        }
    }
}
