//! Room WebSocket handler.
//!
//! Each connection joins one room for its lifetime. Inbound frames are
//! handed to the relay coordinator one at a time, so the header/payload
//! pairing of chunk frames from a single client is never reordered.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::relay::RelayCoordinator;
use crate::room::code;
use crate::transport::{OutboundFrame, StreamMember};

/// State for the room WebSocket handler.
#[derive(Clone)]
pub struct WsState {
    /// Relay coordinator.
    pub coordinator: Arc<RelayCoordinator>,
}

impl WsState {
    /// Create a new WebSocket state.
    pub fn new(coordinator: Arc<RelayCoordinator>) -> Self {
        Self { coordinator }
    }
}

/// Room WebSocket handler.
///
/// GET /ws/{room_id}
pub async fn room_ws_handler(
    ws: WebSocketUpgrade,
    Path(room_id): Path<String>,
    State(state): State<WsState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, room_id))
}

/// Drive one WebSocket connection.
async fn handle_socket(socket: WebSocket, state: WsState, room_id: String) {
    let room_id = code::normalize(&room_id);

    let (tx, mut outbound) = mpsc::unbounded_channel();
    let member = StreamMember::new(tx);
    let conn = member.id();

    state.coordinator.stream_joined(&room_id, member).await;
    tracing::debug!(room = %room_id, conn = %conn, "websocket session started");

    let (mut ws_sender, mut ws_receiver) = socket.split();

    loop {
        tokio::select! {
            // Frames queued for this member by the fan-out.
            frame = outbound.recv() => {
                let message = match frame {
                    Some(OutboundFrame::Text(text)) => Message::Text(text),
                    Some(OutboundFrame::Binary(bytes)) => Message::Binary(bytes),
                    // The registry dropped our handle (pruned); close.
                    None => break,
                };
                if ws_sender.send(message).await.is_err() {
                    break;
                }
            }

            // Inbound frames from the client, processed one at a time.
            inbound = ws_receiver.next() => {
                match inbound {
                    Some(Ok(Message::Text(text))) => {
                        state.coordinator.stream_text(&room_id, &text).await;
                    }
                    Some(Ok(Message::Binary(data))) => {
                        state.coordinator.stream_binary(&room_id, &data).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = ws_sender.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!(room = %room_id, conn = %conn, error = %e, "websocket error");
                        break;
                    }
                }
            }
        }
    }

    state.coordinator.stream_left(&room_id, conn).await;
    tracing::debug!(room = %room_id, conn = %conn, "websocket session ended");
}
