//! HTTP-level integration tests for the web server.

mod common;

use std::sync::Arc;

use common::setup_relay;

use datashare::bot::{BotApi, BotRuntime, BotState};
use datashare::config::ServerConfig;
use datashare::WebServer;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // Use random port
        serve_static: false,
        static_path: "static".to_string(),
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let (coordinator, _bot) = setup_relay(262_144);
    let server = WebServer::new(&test_config(), coordinator, BotState::new());
    let addr = server.run_with_addr().await.unwrap();

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_bot_health_reports_runtime_state() {
    let (coordinator, _bot) = setup_relay(262_144);
    let state = BotState::new();
    let server = WebServer::new(&test_config(), Arc::clone(&coordinator), state.clone());
    let addr = server.run_with_addr().await.unwrap();

    let resp = reqwest::get(format!("http://{addr}/bot/health")).await.unwrap();
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "Bot is not initialized");

    // Install a runtime; the health endpoint flips to running.
    let api = Arc::new(BotApi::new("http://127.0.0.1:0", "test-token"));
    state
        .install(Arc::new(BotRuntime { api, coordinator }))
        .await;

    let resp = reqwest::get(format!("http://{addr}/bot/health")).await.unwrap();
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "Bot is running");
}

#[tokio::test]
async fn test_webhook_unavailable_before_init() {
    let (coordinator, _bot) = setup_relay(262_144);
    let server = WebServer::new(&test_config(), coordinator, BotState::new());
    let addr = server.run_with_addr().await.unwrap();

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/bot/webhook"))
        .json(&serde_json::json!({ "update_id": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 503);
}

#[tokio::test]
async fn test_webhook_acknowledges_after_init() {
    let (coordinator, _bot) = setup_relay(262_144);
    let state = BotState::new();
    let server = WebServer::new(&test_config(), Arc::clone(&coordinator), state.clone());
    let addr = server.run_with_addr().await.unwrap();

    let api = Arc::new(BotApi::new("http://127.0.0.1:0", "test-token"));
    state
        .install(Arc::new(BotRuntime { api, coordinator }))
        .await;

    // An update without a message classifies to nothing; the endpoint must
    // still acknowledge it.
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/bot/webhook"))
        .json(&serde_json::json!({ "update_id": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["ok"], true);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (coordinator, _bot) = setup_relay(262_144);
    let server = WebServer::new(&test_config(), coordinator, BotState::new());
    let addr = server.run_with_addr().await.unwrap();

    let resp = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
