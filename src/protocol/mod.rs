//! Stream-side wire protocol for DataShare.
//!
//! Text frames on the stream transport carry JSON control/chat events in a
//! fixed wire format shared with the web client:
//!
//! - `{"type":"msg","sender":...,"text":...}`
//! - `{"type":"file-meta","fileId":...,"name":...,"size":...,"mime":...,"totalChunks":...,"sender":...}`
//! - `{"type":"file-header","fileId":...,"idx":...,"total":...,"size":...}`
//!
//! Binary frames carry raw chunk bytes with no framing. The field names and
//! order above are load-bearing for interop and covered by tests.

use serde::{Deserialize, Serialize};

/// A chat message event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMsg {
    /// Display name of the sender.
    pub sender: String,
    /// Message text.
    pub text: String,
}

/// Announcement of an incoming chunked file transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Transfer id, unique per concurrent transfer within a room.
    #[serde(rename = "fileId")]
    pub file_id: String,
    /// Declared file name.
    pub name: String,
    /// Declared total size in bytes.
    pub size: u64,
    /// Declared MIME type.
    pub mime: String,
    /// Number of chunks that will follow.
    #[serde(rename = "totalChunks")]
    pub total_chunks: u32,
    /// Display name of the sender.
    pub sender: String,
}

/// Header announcing the binary chunk frame that immediately follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHeader {
    /// Transfer id this chunk belongs to.
    #[serde(rename = "fileId")]
    pub file_id: String,
    /// Zero-based chunk index.
    pub idx: u32,
    /// Total chunk count of the transfer.
    pub total: u32,
    /// Byte length of the following binary frame (bookkeeping only).
    pub size: u32,
}

/// A classified stream-side text event.
///
/// Inbound text frames that do not parse as one of these variants are
/// treated as unrecognized: fanned out verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamEvent {
    /// Chat message.
    #[serde(rename = "msg")]
    Msg(ChatMsg),
    /// File transfer announcement.
    #[serde(rename = "file-meta")]
    FileMeta(FileMeta),
    /// Chunk header.
    #[serde(rename = "file-header")]
    FileHeader(FileHeader),
}

impl StreamEvent {
    /// Classify an inbound text frame.
    ///
    /// Returns None for non-JSON payloads and JSON without a recognized
    /// `type` tag.
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Encode this event in the wire format.
    pub fn to_wire(&self) -> String {
        // Serialization of these closed variants cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
