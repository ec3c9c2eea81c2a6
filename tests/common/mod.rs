//! Shared helpers for integration tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use datashare::transport::{BotSender, ConnectionId, OutboundFrame, StreamMember};
use datashare::{DataShareError, RelayCoordinator, Result, RoomRegistry};

/// Recording bot sender with configurable failing chats.
#[derive(Default)]
pub struct RecordingBot {
    texts: Mutex<Vec<(i64, String)>>,
    files: Mutex<Vec<(i64, String, Vec<u8>)>>,
    failing: Mutex<HashSet<i64>>,
}

impl RecordingBot {
    pub fn fail_chat(&self, chat_id: i64) {
        self.failing.lock().unwrap().insert(chat_id);
    }

    pub fn texts(&self) -> Vec<(i64, String)> {
        self.texts.lock().unwrap().clone()
    }

    pub fn files(&self) -> Vec<(i64, String, Vec<u8>)> {
        self.files.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotSender for RecordingBot {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        if self.failing.lock().unwrap().contains(&chat_id) {
            return Err(DataShareError::BotApi("blocked".to_string()));
        }
        self.texts.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn send_file(&self, chat_id: i64, data: &[u8], name: &str, _mime: &str) -> Result<()> {
        if self.failing.lock().unwrap().contains(&chat_id) {
            return Err(DataShareError::BotApi("blocked".to_string()));
        }
        self.files
            .lock()
            .unwrap()
            .push((chat_id, name.to_string(), data.to_vec()));
        Ok(())
    }
}

/// Build a coordinator over a fresh registry and a recording bot.
pub fn setup_relay(chunk_size: usize) -> (Arc<RelayCoordinator>, Arc<RecordingBot>) {
    let registry = Arc::new(RoomRegistry::new());
    let bot = Arc::new(RecordingBot::default());
    let coordinator = Arc::new(RelayCoordinator::new(
        registry,
        Arc::clone(&bot) as Arc<dyn BotSender>,
        chunk_size,
    ));
    (coordinator, bot)
}

/// Join a stream member to a room, returning its id and outbound queue.
pub async fn join_stream(
    coordinator: &RelayCoordinator,
    room_id: &str,
) -> (ConnectionId, UnboundedReceiver<OutboundFrame>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let member = StreamMember::new(tx);
    let conn = member.id();
    coordinator.stream_joined(room_id, member).await;
    (conn, rx)
}

/// Drain all frames currently queued for a stream member.
pub fn drain(rx: &mut UnboundedReceiver<OutboundFrame>) -> Vec<OutboundFrame> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(frame);
    }
    frames
}
