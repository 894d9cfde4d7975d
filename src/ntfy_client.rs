use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::error::{Channel, ForwarderError};
use crate::formatter::{ascii_title, format_push_message, push_tags};
use crate::types::Alert;

/// ntfy.sh client for sending push notifications
pub struct NtfyClient {
    http_client: Client,
}

impl NtfyClient {
    /// Create new ntfy client
    pub fn new() -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http_client })
    }

    /// Send one alert as a push notification
    ///
    /// The header title is stripped to ASCII; the body keeps the
    /// full-fidelity title above the rendered message.
    pub async fn send_alert(&self, url: &str, alert: &Alert) -> Result<(), ForwarderError> {
        let rendered = format_push_message(alert);
        let body = format!("{}\n\n{}", rendered.title, rendered.message);

        debug!("Sending push notification to {}", url);

        let response = self
            .http_client
            .post(url)
            .header("Title", ascii_title(&rendered.title))
            .header("Priority", rendered.severity.ntfy_priority().to_string())
            .header("Tags", push_tags(alert))
            .body(body.into_bytes())
            .send()
            .await
            .map_err(|e| ForwarderError::delivery(Channel::Ntfy, e.to_string()))?;

        if response.status() == StatusCode::OK {
            debug!("Push notification delivered");
            Ok(())
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ForwarderError::delivery(
                Channel::Ntfy,
                format!("status {}: {}", status, error_text),
            ))
        }
    }
}
