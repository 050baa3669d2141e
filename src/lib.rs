//! tech-digest - a daily AI/tech news digest generator with Teams delivery.
//!
//! One invocation makes at most two network calls and exits:
//! 1. Ask the Anthropic Messages API, with its server-side web-search tool
//!    enabled, for a digest of recent AI/tech articles.
//! 2. POST the digest to a Microsoft Teams incoming webhook as an Adaptive
//!    Card (skipped when no webhook URL is configured).
//!
//! The system uses:
//! - reqwest for both HTTP calls
//! - serde/serde_json for the wire formats
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use tech_digest::ai::DigestClient;
//! use tech_digest::core::config::AppConfig;
//! use tech_digest::teams::{TeamsClient, digest_card};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     tech_digest::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let digest = DigestClient::new(config.anthropic_api_key.clone(), config.model.clone())?
//!         .generate_digest()
//!         .await?;
//!
//!     if let Some(url) = config.teams_webhook_url {
//!         let card = digest_card("AI/Tech News Digest", &digest);
//!         TeamsClient::new(url)?.send_notification(&card).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
pub mod ai;
pub mod core;
pub mod errors;
pub mod teams;

/// Configure structured logging to stderr.
///
/// Uses `RUST_LOG` when set, defaulting to `info`. Logs go to stderr so
/// stdout carries nothing but the digest text.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
