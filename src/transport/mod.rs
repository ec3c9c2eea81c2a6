//! Transport seams for DataShare.
//!
//! This module defines the handles and traits the relay core uses to talk
//! to the two transports without owning their I/O:
//! - `StreamMember`: a live stream-transport (WebSocket) connection handle
//! - `BotSender`: the send primitives of the bot transport

use async_trait::async_trait;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::Result;

/// Identifier of a single stream-transport connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh connection id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single outbound frame for the stream transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    /// A text frame (JSON control/chat events).
    Text(String),
    /// A binary frame (raw chunk bytes, no framing).
    Binary(Vec<u8>),
}

/// A live stream-transport connection handle.
///
/// The handle wraps the sending half of the connection's outbound queue.
/// Delivery fails once the connection task has gone away, which the caller
/// treats as a disconnect.
#[derive(Debug, Clone)]
pub struct StreamMember {
    id: ConnectionId,
    tx: mpsc::UnboundedSender<OutboundFrame>,
}

impl StreamMember {
    /// Create a member handle around an outbound queue.
    pub fn new(tx: mpsc::UnboundedSender<OutboundFrame>) -> Self {
        Self {
            id: ConnectionId::new(),
            tx,
        }
    }

    /// The connection id of this member.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Attempt to deliver a frame to this member.
    ///
    /// Returns false when the underlying connection is gone.
    pub fn try_deliver(&self, frame: OutboundFrame) -> bool {
        self.tx.send(frame).is_ok()
    }
}

/// Send primitives of the bot (non-stream) transport.
///
/// Implemented by the real bot API client and by test doubles. Both
/// operations are fallible independently per recipient.
#[async_trait]
pub trait BotSender: Send + Sync {
    /// Send a text message to a chat.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send a whole file to a chat.
    async fn send_file(&self, chat_id: i64, data: &[u8], name: &str, mime: &str) -> Result<()>;
}
