//! HTTP surface and per-batch delivery orchestration.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use crate::config::ForwarderConfig;
use crate::discord_client::DiscordClient;
use crate::error::ForwarderError;
use crate::ntfy_client::NtfyClient;
use crate::types::{AlertBatch, ErrorResponse, WebhookSummary};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ForwarderConfig>,
    pub ntfy: Arc<NtfyClient>,
    pub discord: Arc<DiscordClient>,
}

impl AppState {
    pub fn new(config: ForwarderConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            ntfy: Arc::new(NtfyClient::new()?),
            discord: Arc::new(DiscordClient::new()?),
        })
    }
}

/// Build the forwarder router
///
/// `/webhook/critical` is a pure alias of `/webhook`; the same handler is
/// registered on both routes.
pub fn forwarder_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(handle_webhook))
        .route("/webhook/critical", post(handle_webhook))
        .route("/health", get(handle_health))
        .with_state(state)
}

async fn handle_health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy"}))
}

async fn handle_webhook(State(state): State<AppState>, body: String) -> Response {
    let batch = match serde_json::from_str::<AlertBatch>(&body) {
        Ok(batch) => batch,
        Err(e) => {
            let err = ForwarderError::MalformedRequest(e.to_string());
            error!("{}", err);
            // Historical contract: parse failures answer with the generic
            // error JSON and status 500, not 400.
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response();
        }
    };

    Json(process_batch(&state, &batch).await).into_response()
}

/// Deliver each alert to the configured channels, never letting one alert's
/// failure block the rest of the batch
async fn process_batch(state: &AppState, batch: &AlertBatch) -> WebhookSummary {
    let mut ntfy_sent = 0;
    let mut discord_sent = 0;

    for alert in &batch.alerts {
        if let Some(webhook_url) = &state.config.discord_webhook {
            match state.discord.send_alert(webhook_url, alert).await {
                Ok(()) => discord_sent += 1,
                Err(e) => error!("{}", e),
            }
        }

        match state.ntfy.send_alert(&state.config.ntfy_url, alert).await {
            Ok(()) => ntfy_sent += 1,
            Err(e) => error!("{}", e),
        }
    }

    WebhookSummary::ok(batch.alerts.len(), ntfy_sent, discord_sent)
}
