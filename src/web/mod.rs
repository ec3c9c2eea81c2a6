//! Web server module for DataShare.
//!
//! Hosts the WebSocket stream transport, the bot webhook endpoint, and the
//! bundled web client.

pub mod router;
pub mod server;
pub mod ws;

pub use server::WebServer;
pub use ws::WsState;
