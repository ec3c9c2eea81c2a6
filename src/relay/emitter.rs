//! Re-chunking of whole files onto the stream transport.
//!
//! Files arriving whole on the bot transport are split into fixed-size
//! chunks and delivered to a room's stream members as one file-meta event
//! followed by, per chunk, a file-header event and the raw binary payload.

use crate::protocol::{FileHeader, FileMeta, StreamEvent};
use crate::relay::fanout::StreamFanout;
use crate::transport::OutboundFrame;

/// Reference chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 262_144;

/// Transfer-id prefix for files originating on the bot transport.
///
/// Keeps emitter-assigned ids out of the id space used by stream-side
/// senders, so the two directions cannot collide within a room.
pub const TRANSFER_ID_PREFIX: &str = "tg-";

/// A whole in-memory file to be re-chunked onto the stream transport.
#[derive(Debug, Clone)]
pub struct OutboundFile {
    /// Source-transport-unique file identifier.
    pub source_id: String,
    /// File name.
    pub name: String,
    /// MIME type.
    pub mime: String,
    /// Display name of the sender.
    pub sender: String,
    /// File contents.
    pub data: Vec<u8>,
}

/// Splits whole files into ordered chunk frames.
#[derive(Debug, Clone)]
pub struct ChunkEmitter {
    chunk_size: usize,
}

impl Default for ChunkEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ChunkEmitter {
    /// Create an emitter with the given chunk size.
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        Self { chunk_size }
    }

    /// The configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks a file of the given length splits into.
    pub fn total_chunks(&self, len: usize) -> u32 {
        len.div_ceil(self.chunk_size) as u32
    }

    /// The transfer id the emitter assigns to a file.
    pub fn transfer_id(&self, source_id: &str) -> String {
        format!("{TRANSFER_ID_PREFIX}{source_id}")
    }

    /// Build the ordered frame sequence for a file.
    ///
    /// One meta frame, then per chunk a header frame immediately followed by
    /// the raw payload. A zero-byte file yields the meta frame only.
    pub fn frames(&self, file: &OutboundFile) -> Vec<OutboundFrame> {
        let file_id = self.transfer_id(&file.source_id);
        let total = self.total_chunks(file.data.len());

        let mut frames = Vec::with_capacity(1 + 2 * total as usize);
        frames.push(OutboundFrame::Text(
            StreamEvent::FileMeta(FileMeta {
                file_id: file_id.clone(),
                name: file.name.clone(),
                size: file.data.len() as u64,
                mime: file.mime.clone(),
                total_chunks: total,
                sender: file.sender.clone(),
            })
            .to_wire(),
        ));

        for (idx, chunk) in file.data.chunks(self.chunk_size).enumerate() {
            frames.push(OutboundFrame::Text(
                StreamEvent::FileHeader(FileHeader {
                    file_id: file_id.clone(),
                    idx: idx as u32,
                    total,
                    size: chunk.len() as u32,
                })
                .to_wire(),
            ));
            frames.push(OutboundFrame::Binary(chunk.to_vec()));
        }

        frames
    }

    /// Emit a file into a room via the fan-out.
    ///
    /// Yields between chunks so a large file does not starve other room
    /// traffic. Returns the number of chunks emitted.
    pub async fn emit(&self, fanout: &StreamFanout, room_id: &str, file: &OutboundFile) -> u32 {
        let mut chunks = 0;
        for frame in self.frames(file) {
            match frame {
                OutboundFrame::Text(text) => {
                    fanout.broadcast_text(room_id, &text).await;
                }
                OutboundFrame::Binary(bytes) => {
                    fanout.broadcast_binary(room_id, bytes).await;
                    chunks += 1;
                    tokio::task::yield_now().await;
                }
            }
        }
        tracing::debug!(room = room_id, chunks, name = %file.name, "emitted chunked file");
        chunks
    }
}
