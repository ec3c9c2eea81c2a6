//! Cross-transport relay core for DataShare.
//!
//! This module provides:
//! - Broadcast fan-out over a room's stream members
//! - Chunk reassembly for files arriving chunked on the stream transport
//! - Re-chunking of whole files originating on the bot transport
//! - The coordinator that routes inbound events between the two

mod assembler;
mod coordinator;
mod emitter;
mod fanout;

pub use assembler::{ChunkAssembler, CompletedFile};
pub use coordinator::{BotFileReport, BotJoin, BotTextReport, RelayCoordinator};
pub use emitter::{ChunkEmitter, OutboundFile, DEFAULT_CHUNK_SIZE, TRANSFER_ID_PREFIX};
pub use fanout::{BroadcastReport, StreamFanout};
