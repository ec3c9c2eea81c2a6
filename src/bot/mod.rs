//! Bot transport adapter for DataShare.
//!
//! This module provides:
//! - The platform API client (sends, file fetches, webhook registration)
//! - Inbound update classification into a closed event variant
//! - Command parsing and reply formatting
//! - The webhook endpoint and bot lifecycle

pub mod api;
pub mod commands;
pub mod event;
pub mod webhook;

pub use api::BotApi;
pub use commands::BotCommand;
pub use event::{classify, BotEvent, FileRef, InboundMessage, Update};
pub use webhook::{create_bot_router, init_bot, shutdown_bot, BotRuntime, BotState};
