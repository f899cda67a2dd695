//! Integration tests for the webhook commands.
//!
//! These tests run the CLI commands with the real HTTP client against a mock
//! Asaas API, starting from a settings file on disk.

use asaas_cli::{
    commands::webhook_cmd::{self, WebhookCommands},
    config::build_client_config,
    errors::Error,
};
use asaas_client::{AsaasWebhookClient, ClientConfig, StatusCode, ACCESS_TOKEN_HEADER};
use asaas_config::{ConfigStore, Settings, CONFIG_FILE_NAME};
use serde_json::json;
use tempfile::TempDir;
use tracing::info;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Initialize logging for tests.
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a client the way the CLI does, then points it at the mock server.
fn create_test_client(temp_dir: &TempDir, mock_server: &MockServer) -> AsaasWebhookClient {
    let store = ConfigStore::new(temp_dir.path().join(CONFIG_FILE_NAME));
    store
        .save(&Settings {
            api_key: "stored-api-key".to_string(),
            sandbox: true,
        })
        .expect("Failed to save config");

    let resolved = build_client_config(&store, false, None).expect("Failed to resolve config");
    AsaasWebhookClient::new(ClientConfig {
        base_url: mock_server.uri(),
        ..resolved
    })
}

#[tokio::test]
async fn test_list_then_update_then_disable() {
    init_test_logging();
    info!("Testing the list, update and toggle flow against a mock API");

    colored::control::set_override(false);
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(header(ACCESS_TOKEN_HEADER, "stored-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "hasMore": false,
            "totalCount": 1,
            "limit": 10,
            "offset": 0,
            "data": [{
                "id": "wh_1",
                "name": "Orders",
                "url": "https://old.example/hook",
                "enabled": true,
                "interrupted": false
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/webhooks/wh_1"))
        .and(body_json(json!({ "url": "https://new.example/hook" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wh_1",
            "name": "Orders",
            "url": "https://new.example/hook",
            "enabled": true,
            "interrupted": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/webhooks/wh_1"))
        .and(body_json(json!({ "interrupted": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wh_1",
            "name": "Orders",
            "url": "https://new.example/hook",
            "enabled": true,
            "interrupted": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&temp_dir, &mock_server);

    let listed = webhook_cmd::execute(&WebhookCommands::List, &client)
        .await
        .expect("list failed");
    assert_eq!(
        listed,
        "ID: wh_1, Name: Orders, URL: https://old.example/hook, Sync: enabled"
    );

    let updated = webhook_cmd::execute(
        &WebhookCommands::UpdateWebhookUrl {
            webhook_id: "wh_1".to_string(),
            new_url: "https://new.example/hook".to_string(),
        },
        &client,
    )
    .await
    .expect("update failed");
    assert_eq!(
        updated,
        "Webhook ID: wh_1 updated with new URL: https://new.example/hook"
    );

    let toggled = webhook_cmd::execute(
        &WebhookCommands::ToggleWebhookSync {
            webhook_id: "wh_1".to_string(),
            enabled: false,
        },
        &client,
    )
    .await
    .expect("toggle failed");
    assert_eq!(toggled, "Webhook ID: wh_1 is now disabled");
}

#[tokio::test]
async fn test_rejected_api_key_surfaces_status_error() {
    init_test_logging();

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "code": "invalid_access_token", "description": "Invalid token" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&temp_dir, &mock_server);
    let result = webhook_cmd::execute(&WebhookCommands::List, &client).await;

    match result {
        Err(Error::Api(err)) => assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED)),
        other => panic!("Expected Api error, got {other:?}"),
    }
}
