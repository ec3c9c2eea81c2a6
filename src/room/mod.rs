//! Room management for DataShare.
//!
//! This module provides:
//! - Room code generation and normalization
//! - The room registry shared between both transport adapters

pub mod code;
mod registry;

pub use registry::{FileRecord, RoomInfo, RoomRegistry};
