//! Inbound bot update classification.
//!
//! Webhook updates arrive as loosely-shaped platform JSON. This module
//! resolves them once, at the adapter boundary, into a closed event variant
//! before anything reaches the relay coordinator.

use serde::Deserialize;

use super::commands::BotCommand;

/// A webhook update from the bot platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update id assigned by the platform.
    pub update_id: i64,
    /// The message this update carries, if any.
    #[serde(default)]
    pub message: Option<Message>,
}

/// A message inside an update.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Chat the message was sent in.
    pub chat: Chat,
    /// Sending user.
    #[serde(default)]
    pub from: Option<User>,
    /// Text content.
    #[serde(default)]
    pub text: Option<String>,
    /// Attached document.
    #[serde(default)]
    pub document: Option<Document>,
    /// Attached photo, as a list of sizes (smallest first).
    #[serde(default)]
    pub photo: Option<Vec<PhotoSize>>,
    /// Attached video.
    #[serde(default)]
    pub video: Option<Video>,
}

/// A chat identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Numeric chat id.
    pub id: i64,
}

/// A platform user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Display name.
    pub first_name: String,
}

/// An attached document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Platform file identifier.
    pub file_id: String,
    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// One size variant of an attached photo.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
    /// Platform file identifier.
    pub file_id: String,
    /// Size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// An attached video.
#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    /// Platform file identifier.
    pub file_id: String,
    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub file_size: Option<u64>,
}

/// Reference to an uploaded file, before its bytes are fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// Platform file identifier, used to fetch the bytes.
    pub file_id: String,
    /// Resolved file name.
    pub name: String,
    /// Resolved MIME type.
    pub mime: String,
    /// Declared size in bytes, when known.
    pub size: Option<u64>,
}

/// A classified inbound bot event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// A slash command.
    Command(BotCommand),
    /// A plain text message.
    Text(String),
    /// A whole-file upload (document, photo, or video).
    File(FileRef),
    /// Anything else (stickers, voice notes, edits).
    Unsupported,
}

/// An inbound message resolved to its chat, sender, and event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Chat the event came from.
    pub chat_id: i64,
    /// Sender display name.
    pub sender: String,
    /// The classified event.
    pub event: BotEvent,
}

/// Classify an update. Returns None for updates without a message.
pub fn classify(update: Update) -> Option<InboundMessage> {
    let message = update.message?;
    let chat_id = message.chat.id;
    let sender = message
        .from
        .map(|u| u.first_name)
        .unwrap_or_else(|| "Unknown".to_string());

    let event = if let Some(text) = message.text {
        match BotCommand::parse(&text) {
            Some(command) => BotEvent::Command(command),
            None => BotEvent::Text(text),
        }
    } else if let Some(doc) = message.document {
        let name = doc
            .file_name
            .clone()
            .unwrap_or_else(|| "document".to_string());
        let mime = doc.mime_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&name)
                .first_or_octet_stream()
                .to_string()
        });
        BotEvent::File(FileRef {
            file_id: doc.file_id,
            name,
            mime,
            size: doc.file_size,
        })
    } else if let Some(photo) = message.photo.filter(|sizes| !sizes.is_empty()) {
        // Sizes are ordered smallest first; relay the largest.
        let best = photo.into_iter().next_back()?;
        BotEvent::File(FileRef {
            file_id: best.file_id,
            name: "photo.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            size: best.file_size,
        })
    } else if let Some(video) = message.video {
        let name = video
            .file_name
            .clone()
            .unwrap_or_else(|| "video.mp4".to_string());
        let mime = video
            .mime_type
            .clone()
            .unwrap_or_else(|| "video/mp4".to_string());
        BotEvent::File(FileRef {
            file_id: video.file_id,
            name,
            mime,
            size: video.file_size,
        })
    } else {
        BotEvent::Unsupported
    };

    Some(InboundMessage {
        chat_id,
        sender,
        event,
    })
}
