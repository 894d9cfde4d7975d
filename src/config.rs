use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

const DEFAULT_NTFY_URL: &str = "https://ntfy.sh/codespartan-mambo-alerts";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Immutable service configuration, read once at startup
#[derive(Debug, Clone)]
pub struct ForwarderConfig {
    /// Push-channel destination topic URL
    pub ntfy_url: String,
    /// Chat-channel webhook URL; `None` disables the channel
    pub discord_webhook: Option<String>,
    /// Listen address for the HTTP surface
    pub bind_addr: SocketAddr,
}

impl ForwarderConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let ntfy_url = env::var("NTFY_URL").unwrap_or_else(|_| DEFAULT_NTFY_URL.to_string());

        // An unset or empty DISCORD_WEBHOOK disables the chat channel
        let discord_webhook = env::var("DISCORD_WEBHOOK")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("failed to parse BIND_ADDR")?;

        Ok(Self {
            ntfy_url,
            discord_webhook,
            bind_addr,
        })
    }

    /// Whether the chat channel is configured
    pub fn discord_enabled(&self) -> bool {
        self.discord_webhook.is_some()
    }
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            ntfy_url: DEFAULT_NTFY_URL.to_string(),
            discord_webhook: None,
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default bind address"),
        }
    }
}
