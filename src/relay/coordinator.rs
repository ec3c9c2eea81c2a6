//! Cross-transport relay orchestration.
//!
//! The coordinator routes inbound events from both transports to the room
//! registry, the fan-out, and the chunk pipeline. Transport adapters own the
//! actual I/O and hand events here after classification; per-recipient
//! delivery errors are isolated and never abort the surrounding broadcast.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::protocol::{ChatMsg, StreamEvent};
use crate::relay::assembler::{ChunkAssembler, CompletedFile};
use crate::relay::emitter::{ChunkEmitter, OutboundFile};
use crate::relay::fanout::StreamFanout;
use crate::room::{code, FileRecord, RoomInfo, RoomRegistry};
use crate::transport::{BotSender, ConnectionId, StreamMember};

/// Result of a bot member joining a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotJoin {
    /// Normalized room code that was joined.
    pub room_id: String,
    /// Room the chat was implicitly removed from, if any.
    pub previous: Option<String>,
    /// Membership summary after the join.
    pub info: RoomInfo,
}

/// Delivery tally for a bot-originated file relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotFileReport {
    /// Other bot members the file reached natively.
    pub bot_delivered: usize,
    /// Other bot members whose delivery failed.
    pub bot_failed: usize,
    /// Chunks emitted toward the room's stream members.
    pub chunks: u32,
}

/// Delivery tally for a bot-originated text relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotTextReport {
    /// Other bot members the message reached.
    pub bot_delivered: usize,
    /// Other bot members whose delivery failed.
    pub bot_failed: usize,
    /// Stream members the message reached.
    pub stream_delivered: usize,
}

/// Orchestrates the room registry, fan-out, and chunk pipeline.
pub struct RelayCoordinator {
    registry: Arc<RoomRegistry>,
    fanout: StreamFanout,
    assembler: Mutex<ChunkAssembler>,
    emitter: ChunkEmitter,
    bot: Arc<dyn BotSender>,
}

impl RelayCoordinator {
    /// Create a coordinator over the given registry and bot send primitives.
    pub fn new(registry: Arc<RoomRegistry>, bot: Arc<dyn BotSender>, chunk_size: usize) -> Self {
        Self {
            fanout: StreamFanout::new(Arc::clone(&registry)),
            registry,
            assembler: Mutex::new(ChunkAssembler::new()),
            emitter: ChunkEmitter::new(chunk_size),
            bot,
        }
    }

    /// The shared room registry.
    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.registry
    }

    // ---- stream transport -------------------------------------------------

    /// A stream connection joined a room.
    pub async fn stream_joined(&self, room_id: &str, member: StreamMember) {
        self.registry.ensure_room(room_id).await;
        self.registry.add_stream_member(room_id, member).await;
    }

    /// A stream connection left a room (disconnect or explicit leave).
    pub async fn stream_left(&self, room_id: &str, conn: ConnectionId) {
        self.registry.remove_stream_member(room_id, conn).await;
        self.reap_assembler(room_id).await;
    }

    /// An inbound text frame from a stream connection.
    ///
    /// The frame is fanned out verbatim to the room (sender included), then
    /// classified: chat messages and file announcements are additionally
    /// forwarded to bot members as formatted text, chunk headers feed the
    /// assembler, and unrecognized payloads stay fan-out only.
    pub async fn stream_text(&self, room_id: &str, text: &str) {
        self.fanout.broadcast_text(room_id, text).await;

        match StreamEvent::parse(text) {
            Some(StreamEvent::Msg(msg)) => {
                let note = format!("💬 {}: {}", msg.sender, msg.text);
                self.notify_bot_members(room_id, None, &note).await;
            }
            Some(StreamEvent::FileMeta(meta)) => {
                self.registry
                    .record_file(
                        room_id,
                        FileRecord {
                            name: meta.name.clone(),
                            size: meta.size,
                        },
                    )
                    .await;

                let note = format!("📁 {} is sharing: {}", meta.sender, meta.name);
                self.notify_bot_members(room_id, None, &note).await;

                let completed = self.assembler.lock().await.begin(room_id, &meta);
                if let Some(file) = completed {
                    self.deliver_completed(file).await;
                }
            }
            Some(StreamEvent::FileHeader(header)) => {
                self.assembler.lock().await.header(room_id, &header);
            }
            None => {
                tracing::debug!(room = room_id, "unrecognized text frame, fan-out only");
            }
        }

        self.reap_assembler(room_id).await;
    }

    /// An inbound binary frame from a stream connection.
    pub async fn stream_binary(&self, room_id: &str, data: &[u8]) {
        self.fanout.broadcast_binary(room_id, data.to_vec()).await;

        let completed = self.assembler.lock().await.chunk(room_id, data);
        if let Some(file) = completed {
            self.deliver_completed(file).await;
        }

        self.reap_assembler(room_id).await;
    }

    // ---- bot transport ----------------------------------------------------

    /// Create a fresh room and join the chat to it.
    pub async fn bot_create(&self, chat_id: i64) -> BotJoin {
        let room_id = code::generate();
        self.bot_join(chat_id, &room_id).await
    }

    /// Join a chat to a room, implicitly leaving its previous room.
    ///
    /// The room is created when it does not exist yet; the reverse index
    /// keeps at most one room per chat at all times.
    pub async fn bot_join(&self, chat_id: i64, room_id: &str) -> BotJoin {
        let room_id = code::normalize(room_id);

        let previous = self
            .registry
            .room_of(chat_id)
            .await
            .filter(|current| *current != room_id);

        // Join the new room before leaving the old one, so the reverse index
        // never goes empty for the chat mid-switch.
        self.registry.ensure_room(&room_id).await;
        self.registry.add_bot_member(&room_id, chat_id).await;

        if let Some(prev) = &previous {
            self.registry.remove_bot_member(prev, chat_id).await;
            self.reap_assembler(prev).await;
        }

        let info = self
            .registry
            .info(&room_id)
            .await
            .unwrap_or(RoomInfo {
                stream_count: 0,
                bot_count: 1,
                total: 1,
                file_count: 0,
            });

        BotJoin {
            room_id,
            previous,
            info,
        }
    }

    /// Remove a chat from its current room. Returns the room left, if any.
    pub async fn bot_leave(&self, chat_id: i64) -> Option<String> {
        let room_id = self.registry.room_of(chat_id).await?;
        self.registry.remove_bot_member(&room_id, chat_id).await;
        self.reap_assembler(&room_id).await;
        Some(room_id)
    }

    /// The chat's current room and its membership summary.
    pub async fn bot_room_info(&self, chat_id: i64) -> Option<(String, RoomInfo)> {
        let room_id = self.registry.room_of(chat_id).await?;
        let info = self.registry.info(&room_id).await?;
        Some((room_id, info))
    }

    /// Relay a bot member's text message to the rest of its room.
    ///
    /// Returns None when the chat is not in a room.
    pub async fn bot_text(&self, chat_id: i64, sender: &str, text: &str) -> Option<BotTextReport> {
        let room_id = self.registry.room_of(chat_id).await?;

        let note = format!("💬 {sender}: {text}");
        let (bot_delivered, bot_failed) = self
            .notify_bot_members(&room_id, Some(chat_id), &note)
            .await;

        let event = StreamEvent::Msg(ChatMsg {
            sender: sender.to_string(),
            text: text.to_string(),
        });
        let report = self.fanout.broadcast_text(&room_id, &event.to_wire()).await;

        Some(BotTextReport {
            bot_delivered,
            bot_failed,
            stream_delivered: report.delivered,
        })
    }

    /// Relay a bot member's whole-file upload to the rest of its room.
    ///
    /// Other bot members get the file natively (both ends speak the same
    /// whole-file API); stream members, when present, get the chunked
    /// emission. Returns None when the chat is not in a room.
    pub async fn bot_file(
        &self,
        chat_id: i64,
        sender: &str,
        file: OutboundFile,
    ) -> Option<BotFileReport> {
        let room_id = self.registry.room_of(chat_id).await?;

        self.registry
            .record_file(
                &room_id,
                FileRecord {
                    name: file.name.clone(),
                    size: file.data.len() as u64,
                },
            )
            .await;

        let mut report = BotFileReport::default();

        let note = format!(
            "📎 From {sender}\n📁 {}\n💾 {:.2} MB",
            file.name,
            file.data.len() as f64 / 1024.0 / 1024.0
        );
        for member in self.registry.bot_members(&room_id).await {
            if member == chat_id {
                continue;
            }
            let sent = self.bot.send_text(member, &note).await.is_ok();
            let sent = sent
                && self
                    .bot
                    .send_file(member, &file.data, &file.name, &file.mime)
                    .await
                    .map_err(|e| {
                        tracing::warn!(chat_id = member, error = %e, "file relay to bot member failed");
                    })
                    .is_ok();
            if sent {
                report.bot_delivered += 1;
            } else {
                report.bot_failed += 1;
            }
        }

        let stream_present = self
            .registry
            .info(&room_id)
            .await
            .is_some_and(|info| info.stream_count > 0);
        if stream_present {
            report.chunks = self.emitter.emit(&self.fanout, &room_id, &file).await;
        }

        Some(report)
    }

    /// Forward a formatted notification to a room's bot members.
    ///
    /// Returns (delivered, failed). Failures are logged and isolated; bot
    /// members are not pruned on failure, their membership only changes via
    /// explicit commands.
    pub async fn notify_bot_members(
        &self,
        room_id: &str,
        except: Option<i64>,
        text: &str,
    ) -> (usize, usize) {
        let mut delivered = 0;
        let mut failed = 0;
        for member in self.registry.bot_members(room_id).await {
            if Some(member) == except {
                continue;
            }
            match self.bot.send_text(member, text).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!(chat_id = member, error = %e, "notification to bot member failed");
                    failed += 1;
                }
            }
        }
        (delivered, failed)
    }

    // ---- shared -----------------------------------------------------------

    /// Hand a reassembled file to every bot member of its room.
    async fn deliver_completed(&self, file: CompletedFile) {
        let note = format!(
            "📎 From {}\n📁 {}\n💾 {:.2} MB",
            file.sender,
            file.name,
            file.size as f64 / 1024.0 / 1024.0
        );
        for member in self.registry.bot_members(&file.room_id).await {
            if let Err(e) = self.bot.send_text(member, &note).await {
                tracing::warn!(chat_id = member, error = %e, "file notice to bot member failed");
                continue;
            }
            if let Err(e) = self
                .bot
                .send_file(member, &file.data, &file.name, &file.mime)
                .await
            {
                tracing::warn!(chat_id = member, error = %e, "file delivery to bot member failed");
            }
        }
        tracing::info!(
            room = %file.room_id,
            name = %file.name,
            bytes = file.data.len(),
            "reassembled file delivered"
        );
    }

    /// Drop assembler state for a room that no longer exists.
    async fn reap_assembler(&self, room_id: &str) {
        if !self.registry.contains(room_id).await {
            self.assembler.lock().await.drop_room(room_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{FileHeader, FileMeta};
    use crate::transport::OutboundFrame;
    use crate::Result;

    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::mpsc;
    use tokio::sync::mpsc::UnboundedReceiver;

    /// Recording bot sender with configurable failing chats.
    #[derive(Default)]
    struct MockBot {
        texts: StdMutex<Vec<(i64, String)>>,
        files: StdMutex<Vec<(i64, String, Vec<u8>)>>,
        failing: StdMutex<HashSet<i64>>,
    }

    impl MockBot {
        fn fail_chat(&self, chat_id: i64) {
            self.failing.lock().unwrap().insert(chat_id);
        }

        fn texts(&self) -> Vec<(i64, String)> {
            self.texts.lock().unwrap().clone()
        }

        fn files(&self) -> Vec<(i64, String, Vec<u8>)> {
            self.files.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BotSender for MockBot {
        async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
            if self.failing.lock().unwrap().contains(&chat_id) {
                return Err(crate::DataShareError::BotApi("blocked".to_string()));
            }
            self.texts.lock().unwrap().push((chat_id, text.to_string()));
            Ok(())
        }

        async fn send_file(&self, chat_id: i64, data: &[u8], name: &str, _mime: &str) -> Result<()> {
            if self.failing.lock().unwrap().contains(&chat_id) {
                return Err(crate::DataShareError::BotApi("blocked".to_string()));
            }
            self.files
                .lock()
                .unwrap()
                .push((chat_id, name.to_string(), data.to_vec()));
            Ok(())
        }
    }

    fn setup() -> (Arc<RelayCoordinator>, Arc<MockBot>) {
        let registry = Arc::new(RoomRegistry::new());
        let bot = Arc::new(MockBot::default());
        let coordinator = Arc::new(RelayCoordinator::new(
            registry,
            Arc::clone(&bot) as Arc<dyn BotSender>,
            4,
        ));
        (coordinator, bot)
    }

    async fn join_stream(
        coordinator: &RelayCoordinator,
        room: &str,
    ) -> (ConnectionId, UnboundedReceiver<OutboundFrame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let member = StreamMember::new(tx);
        let conn = member.id();
        coordinator.stream_joined(room, member).await;
        (conn, rx)
    }

    fn drain(rx: &mut UnboundedReceiver<OutboundFrame>) -> Vec<OutboundFrame> {
        let mut frames = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            frames.push(frame);
        }
        frames
    }

    #[tokio::test]
    async fn test_info_scenario_mixed_membership() {
        let (coordinator, _bot) = setup();

        let (conn, _rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;

        let info = coordinator.registry().info("ABCDEF").await.unwrap();
        assert_eq!(info.stream_count, 1);
        assert_eq!(info.bot_count, 1);
        assert_eq!(info.total, 2);

        coordinator.bot_leave(42).await;
        let info = coordinator.registry().info("ABCDEF").await.unwrap();
        assert_eq!(info.stream_count, 1);
        assert_eq!(info.bot_count, 0);
        assert_eq!(info.total, 1);

        coordinator.stream_left("ABCDEF", conn).await;
        assert!(coordinator.registry().info("ABCDEF").await.is_none());
    }

    #[tokio::test]
    async fn test_bot_switch_rooms_implicit_leave() {
        let (coordinator, _bot) = setup();

        coordinator.bot_join(42, "AAA111").await;
        let join = coordinator.bot_join(42, "BBB222").await;

        assert_eq!(join.previous.as_deref(), Some("AAA111"));
        assert_eq!(
            coordinator.registry().room_of(42).await.as_deref(),
            Some("BBB222")
        );
        // AAA111 lost its last member and was cleaned up.
        assert!(!coordinator.registry().contains("AAA111").await);
    }

    #[tokio::test]
    async fn test_bot_join_normalizes_code() {
        let (coordinator, _bot) = setup();
        let join = coordinator.bot_join(42, " abcdef ").await;
        assert_eq!(join.room_id, "ABCDEF");
        assert!(coordinator.registry().contains("ABCDEF").await);
    }

    #[tokio::test]
    async fn test_bot_rejoin_same_room_keeps_membership() {
        let (coordinator, _bot) = setup();
        coordinator.bot_join(42, "ABCDEF").await;
        let join = coordinator.bot_join(42, "abcdef").await;

        assert_eq!(join.previous, None);
        assert_eq!(join.info.bot_count, 1);
        assert_eq!(
            coordinator.registry().room_of(42).await.as_deref(),
            Some("ABCDEF")
        );
    }

    #[tokio::test]
    async fn test_bot_create_joins_generated_room() {
        let (coordinator, _bot) = setup();
        let join = coordinator.bot_create(42).await;

        assert_eq!(join.room_id.len(), code::CODE_LEN);
        assert_eq!(
            coordinator.registry().room_of(42).await,
            Some(join.room_id.clone())
        );
        assert_eq!(join.info.total, 1);
    }

    #[tokio::test]
    async fn test_stream_msg_fans_out_and_notifies_bot() {
        let (coordinator, bot) = setup();
        let (_conn, mut rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;

        let wire = r#"{"type":"msg","sender":"Alice","text":"hi"}"#;
        coordinator.stream_text("ABCDEF", wire).await;

        // Verbatim fan-out, sender included.
        assert_eq!(
            drain(&mut rx),
            vec![OutboundFrame::Text(wire.to_string())]
        );
        // Formatted forward to the bot member.
        assert_eq!(bot.texts(), vec![(42, "💬 Alice: hi".to_string())]);
    }

    #[tokio::test]
    async fn test_unrecognized_text_fans_out_without_forward() {
        let (coordinator, bot) = setup();
        let (_conn, mut rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;

        coordinator.stream_text("ABCDEF", "not json").await;

        assert_eq!(drain(&mut rx).len(), 1);
        assert!(bot.texts().is_empty());
    }

    #[tokio::test]
    async fn test_web_file_reassembled_and_delivered_to_bot() {
        let (coordinator, bot) = setup();
        let (_conn, mut rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;

        let meta = StreamEvent::FileMeta(FileMeta {
            file_id: "web-1".to_string(),
            name: "notes.txt".to_string(),
            size: 8,
            mime: "text/plain".to_string(),
            total_chunks: 2,
            sender: "Alice".to_string(),
        });
        coordinator.stream_text("ABCDEF", &meta.to_wire()).await;

        // Chunks arrive out of order; each header immediately precedes its
        // payload.
        let h1 = StreamEvent::FileHeader(FileHeader {
            file_id: "web-1".to_string(),
            idx: 1,
            total: 2,
            size: 4,
        });
        coordinator.stream_text("ABCDEF", &h1.to_wire()).await;
        coordinator.stream_binary("ABCDEF", b"efgh").await;

        let h0 = StreamEvent::FileHeader(FileHeader {
            file_id: "web-1".to_string(),
            idx: 0,
            total: 2,
            size: 4,
        });
        coordinator.stream_text("ABCDEF", &h0.to_wire()).await;
        coordinator.stream_binary("ABCDEF", b"abcd").await;

        let files = bot.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, 42);
        assert_eq!(files[0].1, "notes.txt");
        assert_eq!(files[0].2, b"abcd".to_vec().into_iter().chain(b"efgh".to_vec()).collect::<Vec<u8>>());

        // The sharing announcement and file notice both reached the bot.
        let texts = bot.texts();
        assert!(texts.iter().any(|(_, t)| t.contains("sharing")));
        assert!(texts.iter().any(|(_, t)| t.contains("notes.txt")));

        // Everything was also fanned out verbatim to stream members.
        assert_eq!(drain(&mut rx).len(), 5);

        // File count recorded.
        assert_eq!(
            coordinator.registry().info("ABCDEF").await.unwrap().file_count,
            1
        );
    }

    #[tokio::test]
    async fn test_bot_text_crosses_both_transports() {
        let (coordinator, bot) = setup();
        let (_conn, mut rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;
        coordinator.bot_join(43, "ABCDEF").await;

        let report = coordinator.bot_text(42, "Bob", "hello").await.unwrap();
        assert_eq!(report.bot_delivered, 1);
        assert_eq!(report.bot_failed, 0);
        assert_eq!(report.stream_delivered, 1);

        // The sender's chat did not get an echo.
        assert_eq!(bot.texts(), vec![(43, "💬 Bob: hello".to_string())]);

        // Stream members got the wire event.
        let frames = drain(&mut rx);
        assert_eq!(
            frames,
            vec![OutboundFrame::Text(
                r#"{"type":"msg","sender":"Bob","text":"hello"}"#.to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_bot_text_without_room() {
        let (coordinator, _bot) = setup();
        assert!(coordinator.bot_text(42, "Bob", "hello").await.is_none());
    }

    #[tokio::test]
    async fn test_bot_file_chunks_to_stream_and_native_to_bot() {
        let (coordinator, bot) = setup();
        let (_conn, mut rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;
        coordinator.bot_join(43, "ABCDEF").await;

        let report = coordinator
            .bot_file(
                42,
                "Bob",
                OutboundFile {
                    source_id: "doc9".to_string(),
                    name: "photo.jpg".to_string(),
                    mime: "image/jpeg".to_string(),
                    sender: "Bob".to_string(),
                    data: b"abcdefgh".to_vec(),
                },
            )
            .await
            .unwrap();

        assert_eq!(report.bot_delivered, 1);
        assert_eq!(report.chunks, 2);

        // Native relay to the other bot member only.
        let files = bot.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, 43);

        // Chunked emission to stream members: meta + 2 * (header, payload).
        let frames = drain(&mut rx);
        assert_eq!(frames.len(), 5);
        match &frames[0] {
            OutboundFrame::Text(text) => {
                let event = StreamEvent::parse(text).unwrap();
                match event {
                    StreamEvent::FileMeta(meta) => {
                        assert_eq!(meta.file_id, "tg-doc9");
                        assert_eq!(meta.total_chunks, 2);
                    }
                    other => panic!("expected file-meta, got {other:?}"),
                }
            }
            other => panic!("expected text frame, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bot_file_skips_emitter_without_stream_members() {
        let (coordinator, _bot) = setup();
        coordinator.bot_join(42, "ABCDEF").await;

        let report = coordinator
            .bot_file(
                42,
                "Bob",
                OutboundFile {
                    source_id: "doc9".to_string(),
                    name: "a.bin".to_string(),
                    mime: "application/octet-stream".to_string(),
                    sender: "Bob".to_string(),
                    data: vec![0; 16],
                },
            )
            .await
            .unwrap();

        assert_eq!(report.chunks, 0);
        assert_eq!(report.bot_delivered, 0);
    }

    #[tokio::test]
    async fn test_bot_file_reports_partial_success() {
        let (coordinator, bot) = setup();
        coordinator.bot_join(42, "ABCDEF").await;
        coordinator.bot_join(43, "ABCDEF").await;
        coordinator.bot_join(44, "ABCDEF").await;
        bot.fail_chat(43);

        let report = coordinator
            .bot_file(
                42,
                "Bob",
                OutboundFile {
                    source_id: "doc9".to_string(),
                    name: "a.bin".to_string(),
                    mime: "application/octet-stream".to_string(),
                    sender: "Bob".to_string(),
                    data: vec![1, 2, 3],
                },
            )
            .await
            .unwrap();

        assert_eq!(report.bot_delivered, 1);
        assert_eq!(report.bot_failed, 1);
        // The failing chat stays a member; bot membership only changes via
        // explicit commands.
        assert_eq!(
            coordinator.registry().info("ABCDEF").await.unwrap().bot_count,
            3
        );
    }

    #[tokio::test]
    async fn test_abandoned_transfer_dropped_with_room() {
        let (coordinator, bot) = setup();
        let (conn, _rx) = join_stream(&coordinator, "ABCDEF").await;
        coordinator.bot_join(42, "ABCDEF").await;

        let meta = StreamEvent::FileMeta(FileMeta {
            file_id: "web-1".to_string(),
            name: "big.bin".to_string(),
            size: 8,
            mime: "application/octet-stream".to_string(),
            total_chunks: 2,
            sender: "Alice".to_string(),
        });
        coordinator.stream_text("ABCDEF", &meta.to_wire()).await;

        // Everyone leaves mid-transfer.
        coordinator.stream_left("ABCDEF", conn).await;
        coordinator.bot_leave(42).await;
        assert!(!coordinator.registry().contains("ABCDEF").await);

        // The room re-forms; the stale transfer must be gone, so a late
        // header finds nothing to arm.
        coordinator.bot_join(42, "ABCDEF").await;
        let header = StreamEvent::FileHeader(FileHeader {
            file_id: "web-1".to_string(),
            idx: 0,
            total: 2,
            size: 4,
        });
        coordinator.stream_text("ABCDEF", &header.to_wire()).await;
        coordinator.stream_binary("ABCDEF", b"abcd").await;

        assert!(bot.files().is_empty());
    }
}
