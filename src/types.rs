use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alert severity drawn from the `severity` label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Other,
}

impl Severity {
    /// Classify a raw `severity` label value
    pub fn classify(label: &str) -> Self {
        match label {
            "critical" => Severity::Critical,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            _ => Severity::Other,
        }
    }

    /// Get emoji for severity level
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Critical => "🔥",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
            Severity::Other => "📢",
        }
    }

    /// Get numeric ntfy.sh priority for severity level
    pub fn ntfy_priority(&self) -> u8 {
        match self {
            Severity::Critical => 5,
            Severity::Warning => 4,
            Severity::Info => 3,
            Severity::Other => 3,
        }
    }

    /// Get Discord embed color for severity level
    pub fn discord_color(&self) -> u32 {
        match self {
            Severity::Critical => 0xFF0000, // Red
            Severity::Warning => 0xFFA500,  // Orange
            Severity::Info => 0x00BFFF,     // Blue
            Severity::Other => 0x808080,    // Gray
        }
    }
}

/// Webhook batch as posted by the Alertmanager receiver
///
/// A missing `alerts` key deserializes to an empty batch rather than an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertBatch {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// A single alert entry from the batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(rename = "startsAt", default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(rename = "endsAt", default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "unknown".to_string()
}

impl Alert {
    pub fn is_firing(&self) -> bool {
        self.status == "firing"
    }

    pub fn alertname(&self) -> &str {
        self.label_or("alertname", "Unknown Alert")
    }

    /// Raw severity label; used verbatim in tags and the Severidad field
    pub fn severity_label(&self) -> &str {
        self.label_or("severity", "info")
    }

    pub fn severity(&self) -> Severity {
        Severity::classify(self.severity_label())
    }

    pub fn component(&self) -> &str {
        self.label_or("component", "unknown")
    }

    pub fn instance(&self) -> &str {
        self.label_or("instance", "unknown")
    }

    pub fn summary(&self) -> &str {
        self.annotation_or("summary", "")
    }

    pub fn description(&self) -> &str {
        self.annotation_or("description", "")
    }

    /// Timestamp shown on the chat embed: start time, else end time
    pub fn event_timestamp(&self) -> Option<DateTime<Utc>> {
        self.starts_at.or(self.ends_at)
    }

    fn label_or(&self, key: &str, default: &'static str) -> &str {
        self.labels.get(key).map(String::as_str).unwrap_or(default)
    }

    fn annotation_or(&self, key: &str, default: &'static str) -> &str {
        self.annotations
            .get(key)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

/// Discord webhook payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordMessage {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<DiscordEmbed>,
}

/// Discord rich embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordEmbed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Success response for `/webhook` and `/webhook/critical`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookSummary {
    pub status: String,
    pub alerts_processed: usize,
    pub ntfy_sent: usize,
    pub discord_sent: usize,
}

impl WebhookSummary {
    pub fn ok(alerts_processed: usize, ntfy_sent: usize, discord_sent: usize) -> Self {
        Self {
            status: "ok".to_string(),
            alerts_processed,
            ntfy_sent,
            discord_sent,
        }
    }
}

/// Error response returned when the request body cannot be processed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
