//! Bot command parsing and reply formatting.

use crate::room::RoomInfo;

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `/start` or `/help`: show the welcome text.
    Help,
    /// `/create`: create a room and join it.
    Create,
    /// `/join ROOM_ID`: join a room. The argument is None when missing.
    Join(Option<String>),
    /// `/leave`: leave the current room.
    Leave,
    /// `/room`: show current room info.
    Info,
    /// Any other slash command.
    Unknown(String),
}

impl BotCommand {
    /// Parse a text message into a command.
    ///
    /// Returns None for plain text. A `@botname` suffix on the command word
    /// is tolerated, as the platform appends one in group chats.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if !trimmed.starts_with('/') {
            return None;
        }

        let mut parts = trimmed.split_whitespace();
        let word = parts.next()?;
        let name = word.split('@').next().unwrap_or(word);

        let command = match name {
            "/start" | "/help" => Self::Help,
            "/create" => Self::Create,
            "/join" => Self::Join(parts.next().map(str::to_string)),
            "/leave" => Self::Leave,
            "/room" => Self::Info,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Welcome and help text (`/start`, `/help`).
pub fn welcome_text() -> String {
    "🚀 Welcome to DataShare Bot!\n\n\
     Share files instantly across devices using room codes.\n\n\
     Commands:\n\
     /create - Create a new room\n\
     /join ROOM_ID - Join an existing room\n\
     /leave - Leave current room\n\
     /room - Show current room info\n\
     /help - Show this help message\n\n\
     💡 How it works:\n\
     1. Create or join a room\n\
     2. Share the room ID with others\n\
     3. Send files/messages - everyone receives them!"
        .to_string()
}

/// Reply after `/create`.
pub fn created_text(room_id: &str) -> String {
    format!(
        "✅ Room Created!\n\n🔑 Room ID: {room_id}\n👥 Members: 1\n\nShare this code:\n/join {room_id}"
    )
}

/// Reply after a successful `/join`.
pub fn joined_text(room_id: &str, members: usize) -> String {
    format!("✅ Joined Room!\n\n🔑 Room: {room_id}\n👥 Members: {members}\n\nSend files/messages now!")
}

/// Reply to `/join` without an argument.
pub fn join_usage_text() -> String {
    "⚠️ Usage: /join ROOM_ID".to_string()
}

/// Notification to existing members when someone joins.
pub fn member_joined_text(room_id: &str) -> String {
    format!("👤 New member joined {room_id}")
}

/// Reply after `/leave`.
pub fn left_text(room_id: &str) -> String {
    format!("✅ Left room {room_id}")
}

/// Reply to `/leave` outside a room.
pub fn not_in_room_text() -> String {
    "⚠️ You're not in any room.".to_string()
}

/// Reply to `/room` outside a room.
pub fn no_room_info_text() -> String {
    "⚠️ Not in any room.\nUse /create or /join".to_string()
}

/// Reply to `/room`.
pub fn room_info_text(room_id: &str, info: &RoomInfo) -> String {
    format!(
        "📊 Room Info\n\n🔑 ID: {room_id}\n👥 Members: {}\n📁 Files: {}",
        info.total, info.file_count
    )
}

/// Reply to content sent while not in a room.
pub fn join_first_text() -> String {
    "⚠️ Join a room first!".to_string()
}

/// Acknowledgement for a relayed text message.
pub fn sent_ack_text() -> String {
    "✅ Sent".to_string()
}

/// Acknowledgement for a relayed file.
pub fn shared_ack_text(members: usize) -> String {
    format!("✅ Shared with {members} member(s)")
}

/// Reply to an unknown command.
pub fn unknown_command_text(command: &str) -> String {
    format!("⚠️ Unknown command {command}.\nUse /help to see available commands.")
}
