//! Webhook endpoint and lifecycle for the bot transport.
//!
//! The platform delivers updates as HTTP POSTs to `/bot/webhook`. Until the
//! bot runtime is initialized the endpoint answers 503; other rooms and the
//! stream transport are unaffected.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::sync::RwLock;

use crate::relay::{OutboundFile, RelayCoordinator};

use super::api::BotApi;
use super::commands::{
    created_text, join_first_text, join_usage_text, joined_text, left_text, member_joined_text,
    no_room_info_text, not_in_room_text, room_info_text, sent_ack_text, shared_ack_text,
    unknown_command_text, welcome_text, BotCommand,
};
use super::event::{classify, BotEvent, InboundMessage, Update};

/// Number of webhook registration attempts at startup.
const WEBHOOK_RETRIES: usize = 3;

/// Delay between webhook registration attempts.
const WEBHOOK_RETRY_DELAY: Duration = Duration::from_secs(2);

/// The initialized bot runtime.
pub struct BotRuntime {
    /// Platform API client.
    pub api: Arc<BotApi>,
    /// Relay coordinator.
    pub coordinator: Arc<RelayCoordinator>,
}

/// Shared webhook state, empty until the bot runtime is initialized.
#[derive(Clone, Default)]
pub struct BotState {
    runtime: Arc<RwLock<Option<Arc<BotRuntime>>>>,
}

impl BotState {
    /// Create an uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the initialized runtime.
    pub async fn install(&self, runtime: Arc<BotRuntime>) {
        *self.runtime.write().await = Some(runtime);
    }

    /// Clear the runtime (shutdown).
    pub async fn clear(&self) {
        *self.runtime.write().await = None;
    }

    /// The current runtime, if initialized.
    pub async fn runtime(&self) -> Option<Arc<BotRuntime>> {
        self.runtime.read().await.clone()
    }

    /// Whether the bot runtime is initialized.
    pub async fn is_ready(&self) -> bool {
        self.runtime.read().await.is_some()
    }
}

/// Create the bot webhook router.
pub fn create_bot_router(state: BotState) -> Router {
    Router::new()
        .route("/bot/webhook", post(webhook_handler))
        .route("/bot/health", get(bot_health_handler))
        .with_state(state)
}

/// Handle a webhook update from the platform.
async fn webhook_handler(State(state): State<BotState>, Json(update): Json<Update>) -> Response {
    let Some(runtime) = state.runtime().await else {
        tracing::error!("webhook update dropped: bot not initialized");
        return (StatusCode::SERVICE_UNAVAILABLE, "Bot not initialized").into_response();
    };

    if let Some(message) = classify(update) {
        dispatch(&runtime, message).await;
    }

    Json(serde_json::json!({ "ok": true })).into_response()
}

/// Bot health check.
async fn bot_health_handler(State(state): State<BotState>) -> Response {
    let status = if state.is_ready().await {
        "running"
    } else {
        "not initialized"
    };
    Json(serde_json::json!({
        "status": format!("Bot is {status}"),
        "bot": "DataShare Bot",
    }))
    .into_response()
}

/// Route a classified inbound message.
async fn dispatch(runtime: &BotRuntime, msg: InboundMessage) {
    let coordinator = &runtime.coordinator;
    let chat_id = msg.chat_id;

    match msg.event {
        BotEvent::Command(BotCommand::Help) => {
            reply(runtime, chat_id, welcome_text()).await;
        }
        BotEvent::Command(BotCommand::Create) => {
            let join = coordinator.bot_create(chat_id).await;
            reply(runtime, chat_id, created_text(&join.room_id)).await;
        }
        BotEvent::Command(BotCommand::Join(None)) => {
            reply(runtime, chat_id, join_usage_text()).await;
        }
        BotEvent::Command(BotCommand::Join(Some(code))) => {
            let join = coordinator.bot_join(chat_id, &code).await;
            coordinator
                .notify_bot_members(
                    &join.room_id,
                    Some(chat_id),
                    &member_joined_text(&join.room_id),
                )
                .await;
            reply(runtime, chat_id, joined_text(&join.room_id, join.info.total)).await;
        }
        BotEvent::Command(BotCommand::Leave) => {
            let text = match coordinator.bot_leave(chat_id).await {
                Some(room_id) => left_text(&room_id),
                None => not_in_room_text(),
            };
            reply(runtime, chat_id, text).await;
        }
        BotEvent::Command(BotCommand::Info) => {
            let text = match coordinator.bot_room_info(chat_id).await {
                Some((room_id, info)) => room_info_text(&room_id, &info),
                None => no_room_info_text(),
            };
            reply(runtime, chat_id, text).await;
        }
        BotEvent::Command(BotCommand::Unknown(command)) => {
            reply(runtime, chat_id, unknown_command_text(&command)).await;
        }
        BotEvent::Text(text) => {
            let ack = match coordinator.bot_text(chat_id, &msg.sender, &text).await {
                Some(_) => sent_ack_text(),
                None => join_first_text(),
            };
            reply(runtime, chat_id, ack).await;
        }
        BotEvent::File(file_ref) => {
            if coordinator.registry().room_of(chat_id).await.is_none() {
                reply(runtime, chat_id, join_first_text()).await;
                return;
            }

            let data = match runtime.api.fetch_file(&file_ref.file_id).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::error!(file_id = %file_ref.file_id, error = %e, "file fetch failed");
                    reply(runtime, chat_id, "❌ Failed to fetch file".to_string()).await;
                    return;
                }
            };

            let file = OutboundFile {
                source_id: file_ref.file_id,
                name: file_ref.name,
                mime: file_ref.mime,
                sender: msg.sender.clone(),
                data,
            };
            let ack = match coordinator.bot_file(chat_id, &msg.sender, file).await {
                Some(report) => shared_ack_text(report.bot_delivered),
                None => join_first_text(),
            };
            reply(runtime, chat_id, ack).await;
        }
        BotEvent::Unsupported => {
            tracing::debug!(chat_id, "unsupported update content ignored");
        }
    }
}

/// Send a reply to the originating chat, logging failures.
async fn reply(runtime: &BotRuntime, chat_id: i64, text: String) {
    if let Err(e) = runtime.api.send_message(chat_id, &text).await {
        tracing::warn!(chat_id, error = %e, "reply failed");
    }
}

/// Initialize the bot runtime and register the webhook.
///
/// The runtime is installed before webhook registration, so updates already
/// queued on the platform side are handled as soon as delivery starts.
/// Registration is retried a few times; failures leave the runtime usable
/// for outbound sends.
pub async fn init_bot(
    state: &BotState,
    api: Arc<BotApi>,
    coordinator: Arc<RelayCoordinator>,
    webhook_url: &str,
) {
    state
        .install(Arc::new(BotRuntime {
            api: Arc::clone(&api),
            coordinator,
        }))
        .await;
    tracing::info!("bot runtime initialized");

    if webhook_url.is_empty() {
        tracing::warn!("webhook_url not set, skipping webhook registration");
        return;
    }

    let full_url = format!("{}/bot/webhook", webhook_url.trim_end_matches('/'));
    for attempt in 1..=WEBHOOK_RETRIES {
        match api.set_webhook(&full_url).await {
            Ok(()) => {
                tracing::info!(url = %full_url, "webhook registered");
                return;
            }
            Err(e) => {
                tracing::error!(attempt, error = %e, "webhook registration failed");
                if attempt < WEBHOOK_RETRIES {
                    tokio::time::sleep(WEBHOOK_RETRY_DELAY).await;
                }
            }
        }
    }
}

/// Remove the webhook and clear the runtime.
pub async fn shutdown_bot(state: &BotState) {
    if let Some(runtime) = state.runtime().await {
        if let Err(e) = runtime.api.delete_webhook().await {
            tracing::warn!(error = %e, "webhook removal failed");
        }
    }
    state.clear().await;
    tracing::info!("bot shutdown complete");
}
