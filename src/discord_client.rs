use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{Channel, ForwarderError};
use crate::formatter::format_discord_message;
use crate::types::Alert;

/// Discord webhook client for sending embed messages
pub struct DiscordClient {
    http_client: Client,
}

impl DiscordClient {
    /// Create new Discord client
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }

    /// Send one alert to a Discord webhook as a rich embed
    pub async fn send_alert(&self, webhook_url: &str, alert: &Alert) -> Result<(), ForwarderError> {
        let message = format_discord_message(alert);

        debug!("Sending message to Discord webhook");

        let response = self
            .http_client
            .post(webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| ForwarderError::delivery(Channel::Discord, e.to_string()))?;

        // Discord answers webhook posts with 204, or 200 with ?wait=true
        match response.status().as_u16() {
            200 | 204 => {
                debug!("Discord message delivered");
                Ok(())
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ForwarderError::delivery(
                    Channel::Discord,
                    format!("status {}: {}", status, error_text),
                ))
            }
        }
    }
}
