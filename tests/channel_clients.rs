//! Channel client contract tests against wiremock doubles.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ntfy_forwarder::discord_client::DiscordClient;
use ntfy_forwarder::error::{Channel, ForwarderError};
use ntfy_forwarder::ntfy_client::NtfyClient;
use ntfy_forwarder::types::Alert;

fn resolved_alert() -> Alert {
    serde_json::from_value(json!({
        "status": "resolved",
        "labels": {
            "alertname": "DiskFull",
            "severity": "warning",
            "component": "db",
            "instance": "db1"
        },
        "annotations": {
            "summary": "Disk usage back to normal"
        },
        "endsAt": "2024-06-01T11:00:00Z"
    }))
    .unwrap()
}

#[tokio::test]
async fn test_ntfy_send_sets_header_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/alerts"))
        .and(header("Title", "RESUELTO: DiskFull"))
        .and(header("Priority", "4"))
        .and(header("Tags", "warning,monitoring,codespartan"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = NtfyClient::new().unwrap();
    let result = client
        .send_alert(&format!("{}/alerts", mock_server.uri()), &resolved_alert())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_ntfy_non_200_is_delivery_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("limit reached"))
        .mount(&mock_server)
        .await;

    let client = NtfyClient::new().unwrap();
    let result = client.send_alert(&mock_server.uri(), &resolved_alert()).await;

    match result {
        Err(ForwarderError::DeliveryFailure { channel, reason }) => {
            assert_eq!(channel, Channel::Ntfy);
            assert!(reason.contains("429"));
            assert!(reason.contains("limit reached"));
        }
        other => panic!("expected delivery failure, got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_discord_send_posts_resolved_embed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/webhooks/1/token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DiscordClient::new().unwrap();
    let result = client
        .send_alert(
            &format!("{}/api/webhooks/1/token", mock_server.uri()),
            &resolved_alert(),
        )
        .await;

    assert!(result.is_ok());

    let requests = mock_server
        .received_requests()
        .await
        .expect("recorded requests");
    let payload: Value = serde_json::from_slice(&requests[0].body).expect("discord JSON");

    let embed = &payload["embeds"][0];
    assert_eq!(embed["title"], "✅ RESUELTO: DiskFull");
    assert_eq!(embed["color"], 0x00FF00);
    assert_eq!(embed["footer"]["text"], "Estado: Resuelta");
    assert!(embed["timestamp"]
        .as_str()
        .unwrap()
        .starts_with("2024-06-01T11:00:00"));
}

#[tokio::test]
async fn test_discord_error_status_is_delivery_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid embed"))
        .mount(&mock_server)
        .await;

    let client = DiscordClient::new().unwrap();
    let result = client.send_alert(&mock_server.uri(), &resolved_alert()).await;

    match result {
        Err(ForwarderError::DeliveryFailure { channel, reason }) => {
            assert_eq!(channel, Channel::Discord);
            assert!(reason.contains("400"));
        }
        other => panic!("expected delivery failure, got {:?}", other.err()),
    }
}
