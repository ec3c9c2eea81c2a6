//! DataShare - cross-transport room relay
//!
//! Lets participants in a named room exchange chat messages and files across
//! two transports: web clients on a persistent WebSocket stream, and a
//! Telegram-style bot reached through webhooks. Files sent whole on the bot
//! side arrive as ordered binary chunks on the stream side, and vice versa.

pub mod bot;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod relay;
pub mod room;
pub mod transport;
pub mod web;

pub use config::Config;
pub use error::{DataShareError, Result};
pub use protocol::{ChatMsg, FileHeader, FileMeta, StreamEvent};
pub use relay::{
    BroadcastReport, ChunkAssembler, ChunkEmitter, CompletedFile, OutboundFile, RelayCoordinator,
    StreamFanout, DEFAULT_CHUNK_SIZE,
};
pub use room::{FileRecord, RoomInfo, RoomRegistry};
pub use transport::{BotSender, ConnectionId, OutboundFrame, StreamMember};
pub use web::WebServer;
