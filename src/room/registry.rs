//! Room registry for DataShare.
//!
//! The registry owns the set of active rooms and their membership across
//! both transports, plus the reverse index from bot chat id to current room.
//! A room exists iff it has at least one member of either kind; the last
//! member leaving deletes it. Cleanup happens under the same lock as the
//! mutation, so a concurrent `info` never observes an empty room that is
//! still present.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;

use crate::transport::{ConnectionId, StreamMember};

/// Metadata of a file that passed through a room, kept for informational
/// counts only.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Declared file name.
    pub name: String,
    /// Declared size in bytes.
    pub size: u64,
}

/// Summary of a room's membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    /// Number of stream-transport members.
    pub stream_count: usize,
    /// Number of bot-transport members.
    pub bot_count: usize,
    /// Total member count.
    pub total: usize,
    /// Number of files shared through the room.
    pub file_count: usize,
}

/// A single room's state.
#[derive(Debug, Default)]
struct Room {
    stream_members: HashMap<ConnectionId, StreamMember>,
    bot_members: HashSet<i64>,
    files: Vec<FileRecord>,
}

impl Room {
    fn is_empty(&self) -> bool {
        self.stream_members.is_empty() && self.bot_members.is_empty()
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    rooms: HashMap<String, Room>,
    /// Reverse index: bot chat id -> room the chat is currently in.
    bot_index: HashMap<i64, String>,
}

impl RegistryInner {
    /// Delete the room when both membership sets are empty.
    fn cleanup(&mut self, room_id: &str) {
        if let Some(room) = self.rooms.get(room_id) {
            if room.is_empty() {
                self.rooms.remove(room_id);
                tracing::info!(room = room_id, "cleaned up empty room");
            }
        }
    }
}

/// Registry of active rooms, shared between both transport adapters.
///
/// Constructed once at process start and handed to the adapters; there is no
/// ambient singleton.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    inner: RwLock<RegistryInner>,
}

impl RoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent room creation.
    pub async fn ensure_room(&self, room_id: &str) {
        let mut inner = self.inner.write().await;
        if !inner.rooms.contains_key(room_id) {
            inner.rooms.insert(room_id.to_string(), Room::default());
            tracing::info!(room = room_id, "created room");
        }
    }

    /// Add a stream member to a room. No-op on an unknown room.
    pub async fn add_stream_member(&self, room_id: &str, member: StreamMember) {
        let mut inner = self.inner.write().await;
        if let Some(room) = inner.rooms.get_mut(room_id) {
            tracing::info!(room = room_id, conn = %member.id(), "stream member joined");
            room.stream_members.insert(member.id(), member);
        }
    }

    /// Remove a stream member from a room.
    ///
    /// Returns true if the member was present. No-op on an unknown room.
    pub async fn remove_stream_member(&self, room_id: &str, conn: ConnectionId) -> bool {
        let mut inner = self.inner.write().await;
        let removed = match inner.rooms.get_mut(room_id) {
            Some(room) => room.stream_members.remove(&conn).is_some(),
            None => false,
        };
        if removed {
            tracing::info!(room = room_id, conn = %conn, "stream member left");
            inner.cleanup(room_id);
        }
        removed
    }

    /// Add a bot member to a room and index it. No-op on an unknown room.
    ///
    /// The registry only supports explicit leave; callers switching a chat
    /// between rooms remove it from the previous room first.
    pub async fn add_bot_member(&self, room_id: &str, chat_id: i64) {
        let mut inner = self.inner.write().await;
        if inner.rooms.contains_key(room_id) {
            inner.bot_index.insert(chat_id, room_id.to_string());
            if let Some(room) = inner.rooms.get_mut(room_id) {
                room.bot_members.insert(chat_id);
            }
            tracing::info!(room = room_id, chat_id, "bot member joined");
        }
    }

    /// Remove a bot member from a room.
    ///
    /// Returns true if the member was present. No-op on an unknown room.
    pub async fn remove_bot_member(&self, room_id: &str, chat_id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let removed = match inner.rooms.get_mut(room_id) {
            Some(room) => room.bot_members.remove(&chat_id),
            None => false,
        };
        if removed {
            // Drop the reverse-index entry only if it still points here.
            if inner.bot_index.get(&chat_id).map(String::as_str) == Some(room_id) {
                inner.bot_index.remove(&chat_id);
            }
            tracing::info!(room = room_id, chat_id, "bot member left");
            inner.cleanup(room_id);
        }
        removed
    }

    /// Look up the room a bot chat is currently in.
    pub async fn room_of(&self, chat_id: i64) -> Option<String> {
        self.inner.read().await.bot_index.get(&chat_id).cloned()
    }

    /// Membership summary of a room, or None when absent.
    pub async fn info(&self, room_id: &str) -> Option<RoomInfo> {
        let inner = self.inner.read().await;
        inner.rooms.get(room_id).map(|room| RoomInfo {
            stream_count: room.stream_members.len(),
            bot_count: room.bot_members.len(),
            total: room.stream_members.len() + room.bot_members.len(),
            file_count: room.files.len(),
        })
    }

    /// Snapshot of a room's bot members. Empty for an unknown room.
    pub async fn bot_members(&self, room_id: &str) -> HashSet<i64> {
        let inner = self.inner.read().await;
        inner
            .rooms
            .get(room_id)
            .map(|room| room.bot_members.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a room's stream members. Empty for an unknown room.
    pub async fn stream_members(&self, room_id: &str) -> Vec<StreamMember> {
        let inner = self.inner.read().await;
        inner
            .rooms
            .get(room_id)
            .map(|room| room.stream_members.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Record a shared file for informational counts. No-op on an unknown room.
    pub async fn record_file(&self, room_id: &str, file: FileRecord) {
        let mut inner = self.inner.write().await;
        if let Some(room) = inner.rooms.get_mut(room_id) {
            room.files.push(file);
        }
    }

    /// Whether a room currently exists.
    pub async fn contains(&self, room_id: &str) -> bool {
        self.inner.read().await.rooms.contains_key(room_id)
    }

    /// Number of active rooms.
    pub async fn room_count(&self) -> usize {
        self.inner.read().await.rooms.len()
    }
}
