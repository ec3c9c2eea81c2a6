//! Broadcast fan-out over a room's stream members.

use std::sync::Arc;

use crate::room::RoomRegistry;
use crate::transport::{ConnectionId, OutboundFrame};

/// Per-call outcome of a broadcast.
///
/// Callers get an explicit success/failure tally per recipient instead of
/// side-effect logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Members the payload was delivered to.
    pub delivered: usize,
    /// Members whose delivery failed and that were removed from the room.
    pub pruned: Vec<ConnectionId>,
}

/// Fan-out of text and binary frames to every stream member of a room.
///
/// Delivery is fire-and-forget, at most once per member per call. A failing
/// member is treated as disconnected and removed from the room without
/// aborting delivery to the rest.
#[derive(Clone)]
pub struct StreamFanout {
    registry: Arc<RoomRegistry>,
}

impl StreamFanout {
    /// Create a fan-out over the given registry.
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Broadcast a text frame to every stream member of a room.
    pub async fn broadcast_text(&self, room_id: &str, payload: &str) -> BroadcastReport {
        self.broadcast(room_id, OutboundFrame::Text(payload.to_string()))
            .await
    }

    /// Broadcast a binary frame to every stream member of a room.
    pub async fn broadcast_binary(&self, room_id: &str, payload: Vec<u8>) -> BroadcastReport {
        self.broadcast(room_id, OutboundFrame::Binary(payload)).await
    }

    async fn broadcast(&self, room_id: &str, frame: OutboundFrame) -> BroadcastReport {
        let members = self.registry.stream_members(room_id).await;
        let mut report = BroadcastReport::default();

        for member in members {
            if member.try_deliver(frame.clone()) {
                report.delivered += 1;
            } else {
                tracing::debug!(room = room_id, conn = %member.id(), "delivery failed, pruning member");
                report.pruned.push(member.id());
            }
        }

        for conn in &report.pruned {
            self.registry.remove_stream_member(room_id, *conn).await;
        }

        report
    }
}
