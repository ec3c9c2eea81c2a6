//! Chunk reassembly for files crossing from the stream transport.
//!
//! A transfer is driven by three inbound event kinds, always in room scope:
//! a file-meta event opens the transfer, each file-header event arms the
//! transfer's pending-chunk slot, and the raw binary frame that follows
//! binds to the first open transfer in the room with an armed slot. Chunks
//! may arrive out of index order; completion sorts them before
//! concatenation.

use std::collections::HashMap;

use crate::protocol::{FileHeader, FileMeta};

/// A fully reassembled file ready for bot-side delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedFile {
    /// Room the transfer happened in.
    pub room_id: String,
    /// Declared file name.
    pub name: String,
    /// Declared MIME type.
    pub mime: String,
    /// Declared total size in bytes.
    pub size: u64,
    /// Display name of the sender.
    pub sender: String,
    /// Reassembled file contents.
    pub data: Vec<u8>,
}

/// A file being reassembled from chunks.
#[derive(Debug)]
struct InFlightTransfer {
    id: String,
    name: String,
    size: u64,
    mime: String,
    total_chunks: u32,
    sender: String,
    /// Received chunks, tagged with their index. Arrival order.
    chunks: Vec<(u32, Vec<u8>)>,
    /// Header waiting for the binary payload that follows it.
    pending: Option<FileHeader>,
}

impl InFlightTransfer {
    fn open(meta: &FileMeta) -> Self {
        Self {
            id: meta.file_id.clone(),
            name: meta.name.clone(),
            size: meta.size,
            mime: meta.mime.clone(),
            total_chunks: meta.total_chunks,
            sender: meta.sender.clone(),
            chunks: Vec::new(),
            pending: None,
        }
    }

    fn is_complete(&self) -> bool {
        self.chunks.len() as u32 >= self.total_chunks
    }

    fn finalize(mut self, room_id: &str) -> CompletedFile {
        // Index order, not arrival order.
        self.chunks.sort_by_key(|(idx, _)| *idx);
        let data = self
            .chunks
            .into_iter()
            .flat_map(|(_, bytes)| bytes)
            .collect();
        CompletedFile {
            room_id: room_id.to_string(),
            name: self.name,
            mime: self.mime,
            size: self.size,
            sender: self.sender,
            data,
        }
    }
}

/// Per-room reassembly state.
///
/// Transfers that never complete (a peer disconnecting mid-transfer) stay
/// in-flight until the owning room is torn down; there is no timeout.
#[derive(Debug, Default)]
pub struct ChunkAssembler {
    /// Open transfers per room, in open order. Open order decides which
    /// transfer a binary frame binds to.
    transfers: HashMap<String, Vec<InFlightTransfer>>,
}

impl ChunkAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transfer from a file-meta event.
    ///
    /// A meta event whose id duplicates an open transfer replaces it,
    /// orphaning the old transfer's partial chunks. A zero-chunk transfer
    /// completes immediately.
    pub fn begin(&mut self, room_id: &str, meta: &FileMeta) -> Option<CompletedFile> {
        let transfers = self.transfers.entry(room_id.to_string()).or_default();

        if let Some(pos) = transfers.iter().position(|t| t.id == meta.file_id) {
            tracing::warn!(
                room = room_id,
                transfer = %meta.file_id,
                "duplicate transfer id, replacing open transfer"
            );
            transfers.remove(pos);
        }

        if meta.total_chunks == 0 {
            return Some(InFlightTransfer::open(meta).finalize(room_id));
        }

        transfers.push(InFlightTransfer::open(meta));
        None
    }

    /// Arm a transfer's pending-chunk slot from a file-header event.
    ///
    /// Returns false (and drops the header) when no open transfer in the
    /// room matches its id.
    pub fn header(&mut self, room_id: &str, header: &FileHeader) -> bool {
        let Some(transfers) = self.transfers.get_mut(room_id) else {
            return false;
        };
        match transfers.iter_mut().find(|t| t.id == header.file_id) {
            Some(transfer) => {
                transfer.pending = Some(header.clone());
                true
            }
            None => {
                tracing::debug!(
                    room = room_id,
                    transfer = %header.file_id,
                    "header for unknown transfer dropped"
                );
                false
            }
        }
    }

    /// Bind a raw binary frame to the first open transfer in the room with
    /// an armed pending header.
    ///
    /// Returns the reassembled file once the transfer's final chunk lands.
    /// A frame with no transfer to bind to is dropped.
    pub fn chunk(&mut self, room_id: &str, payload: &[u8]) -> Option<CompletedFile> {
        let transfers = self.transfers.get_mut(room_id)?;
        let pos = transfers.iter().position(|t| t.pending.is_some())?;

        let transfer = &mut transfers[pos];
        let header = transfer.pending.take()?;
        if payload.len() != header.size as usize {
            // The declared length is bookkeeping only; the frame is
            // authoritative.
            tracing::debug!(
                room = room_id,
                transfer = %transfer.id,
                declared = header.size,
                actual = payload.len(),
                "chunk length differs from header"
            );
        }
        transfer.chunks.push((header.idx, payload.to_vec()));

        if transfer.is_complete() {
            let done = transfers.remove(pos);
            if transfers.is_empty() {
                self.transfers.remove(room_id);
            }
            return Some(done.finalize(room_id));
        }
        None
    }

    /// Drop all in-flight transfers of a room (room teardown).
    pub fn drop_room(&mut self, room_id: &str) {
        if let Some(dropped) = self.transfers.remove(room_id) {
            if !dropped.is_empty() {
                tracing::debug!(
                    room = room_id,
                    count = dropped.len(),
                    "dropped in-flight transfers with room"
                );
            }
        }
    }

    /// Number of open transfers in a room.
    pub fn in_flight(&self, room_id: &str) -> usize {
        self.transfers.get(room_id).map_or(0, Vec::len)
    }
}
