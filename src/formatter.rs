//! Per-alert rendering for the push and chat channels.
//!
//! All functions here are pure; delivery lives in the channel clients.

use crate::types::{Alert, DiscordEmbed, DiscordMessage, EmbedField, EmbedFooter, Severity};

/// Discord caps embed field values at this many characters
const DISCORD_FIELD_LIMIT: usize = 1024;

const DISCORD_USERNAME: &str = "CodeSpartan Alerts";
const DISCORD_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/3114/3114883.png";

/// Resolved alerts override the severity color
const RESOLVED_COLOR: u32 = 0x00FF00;

/// Rendered push notification content for one alert
#[derive(Debug, Clone)]
pub struct RenderedAlert {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

/// Format one alert for the push channel
pub fn format_push_message(alert: &Alert) -> RenderedAlert {
    RenderedAlert {
        title: alert_title(alert),
        message: format!(
            "{}\n\n{}\n\nComponente: {}\nInstancia: {}",
            alert.summary(),
            alert.description(),
            alert.component(),
            alert.instance()
        ),
        severity: alert.severity(),
    }
}

/// ntfy.sh tag list: raw severity label plus fixed tags
pub fn push_tags(alert: &Alert) -> String {
    format!("{},monitoring,codespartan", alert.severity_label())
}

/// Strip a title down to ASCII for use as an HTTP header value
///
/// ntfy.sh expects ASCII header values, so emojis are removed. If nothing
/// printable remains, the literal `Alert` is substituted.
pub fn ascii_title(title: &str) -> String {
    let stripped: String = title.chars().filter(char::is_ascii).collect();
    let stripped = stripped.trim();
    if stripped.is_empty() {
        "Alert".to_string()
    } else {
        stripped.to_string()
    }
}

/// Format one alert as a Discord webhook message with a rich embed
pub fn format_discord_message(alert: &Alert) -> DiscordMessage {
    let severity = alert.severity();

    let (footer_text, color) = if alert.is_firing() {
        ("Estado: ACTIVA", severity.discord_color())
    } else {
        ("Estado: Resuelta", RESOLVED_COLOR)
    };

    let description = alert.description();
    let description_field = if description.is_empty() {
        "N/A".to_string()
    } else {
        truncate_chars(description, DISCORD_FIELD_LIMIT)
    };

    let embed = DiscordEmbed {
        title: alert_title(alert),
        description: alert.summary().to_string(),
        color,
        fields: vec![
            EmbedField {
                name: "Descripción".to_string(),
                value: description_field,
                inline: false,
            },
            EmbedField {
                name: "Componente".to_string(),
                value: alert.component().to_string(),
                inline: true,
            },
            EmbedField {
                name: "Instancia".to_string(),
                value: alert.instance().to_string(),
                inline: true,
            },
            EmbedField {
                name: "Severidad".to_string(),
                value: alert.severity_label().to_uppercase(),
                inline: true,
            },
        ],
        footer: EmbedFooter {
            text: footer_text.to_string(),
        },
        timestamp: alert.event_timestamp().map(|ts| ts.to_rfc3339()),
    };

    DiscordMessage {
        username: DISCORD_USERNAME.to_string(),
        avatar_url: DISCORD_AVATAR_URL.to_string(),
        embeds: vec![embed],
    }
}

/// Full-fidelity title: severity emoji while firing, fixed check mark once
/// resolved
fn alert_title(alert: &Alert) -> String {
    if alert.is_firing() {
        format!("{} ALERTA: {}", alert.severity().emoji(), alert.alertname())
    } else {
        format!("✅ RESUELTO: {}", alert.alertname())
    }
}

fn truncate_chars(value: &str, limit: usize) -> String {
    value.chars().take(limit).collect()
}
