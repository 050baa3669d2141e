use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

use tech_digest::ai::DigestClient;
use tech_digest::core::config::AppConfig;
use tech_digest::setup_logging;
use tech_digest::teams::{TeamsClient, digest_card};

const RULE_WIDTH: usize = 70;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let config = AppConfig::from_env()?;
    let title = format!("AI/Tech News Digest - {}", Local::now().format("%B %d, %Y"));

    println!("\n{title}\n");
    println!("{}", "=".repeat(RULE_WIDTH));

    // A failure here propagates and terminates the run; there is nothing
    // useful to deliver without a digest.
    let client = DigestClient::new(config.anthropic_api_key.clone(), config.model.clone())?;
    let digest = client.generate_digest().await?;

    println!("{digest}");
    println!("{}", "=".repeat(RULE_WIDTH));

    if config.teams_webhook_url.is_none() {
        info!("TEAMS_WEBHOOK_URL not set; skipping webhook delivery");
        return Ok(());
    }

    // Webhook failure is reported but does not abort the run; the digest
    // has already been printed.
    let card = digest_card(&title, &digest);
    match TeamsClient::from_config(&config) {
        Ok(notifier) => match notifier.send_notification(&card).await {
            Ok(()) => println!("Message sent successfully!"),
            Err(e) => {
                error!("Webhook delivery failed: {e}");
                println!("Failed to send message: {e}");
            }
        },
        Err(e) => {
            error!("Webhook client setup failed: {e}");
            println!("Failed to send message: {e}");
        }
    }

    Ok(())
}
